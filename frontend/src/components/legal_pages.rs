use yew::prelude::*;

/// Legal notice. Static text, no interaction.
#[function_component(ImprintPage)]
pub fn imprint_page() -> Html {
    html! {
        <div class="legal-page">
            <h2>{"Imprint"}</h2>
            <p>{"Fairmont Barbers"}</p>
            <p>{"Fairmontgasse 12, 1070 Vienna, Austria"}</p>
            <p>{"Phone: +43 1 234 56 78"}</p>
            <p>{"Email: hello@fairmontbarbers.example"}</p>
            <p>
                {"Responsible for the content of this site: Fairmont Barbers e.U. "}
                {"Commercial register: FN 123456a, Commercial Court of Vienna."}
            </p>
        </div>
    }
}

/// Privacy policy. Static text, no interaction.
#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <div class="legal-page">
            <h2>{"Privacy policy"}</h2>
            <p>
                {"When you book an appointment we process the name and phone "}
                {"number you enter, solely to manage that appointment. The data "}
                {"is transmitted to our booking service and deleted once it is "}
                {"no longer needed for the appointment."}
            </p>
            <p>
                {"This site sets no cookies and keeps no local session data. "}
                {"Calendar files you download are generated in your browser and "}
                {"never uploaded."}
            </p>
            <p>
                {"To have your booking data corrected or deleted, contact us at "}
                {"hello@fairmontbarbers.example."}
            </p>
        </div>
    }
}
