/// Component-tagged console logging.
///
/// Kept as a single seam so failure paths log uniformly; backed by the
/// browser console since the booking backend exposes no log endpoint.
pub struct Logger;

impl Logger {
    pub fn info(component: &str, message: &str) {
        gloo::console::log!(format!("[{component}] {message}"));
    }

    pub fn warn(component: &str, message: &str) {
        gloo::console::warn!(format!("[{component}] {message}"));
    }

    pub fn error(component: &str, message: &str) {
        gloo::console::error!(format!("[{component}] {message}"));
    }
}
