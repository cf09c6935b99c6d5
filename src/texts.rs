//! Site Texts
//!
//! All visible Slovenian copy, and the mapping from registry notices to
//! toast text.

use wedding_registry::{Notice, RegistryError};

use crate::models::ToastKind;

pub const COUPLE: &str = "Katarina & Vid";
pub const HASHTAG: &str = "#KatarinaInVid2026";

pub mod hero {
    pub const TOGETHER_LINE: &str = "Skupaj s prijatelji in družino";
    pub const INVITE_LINE_1: &str = "Vabilo na praznovanje";
    pub const INVITE_LINE_2: &str = "najinega skupnega začetka poti";
    pub const DATE_LINE: &str = "Sobota, 11. julij 2026";
    pub const TIME_LINE: &str = "ob 12. uri";
    pub const GREETING: &str = "Živjo";
    pub const NAV_HINT: &str = "Za lažjo navigacijo si lahko pomagaš s spodnjimi gumbi.";
    pub const CONFIRM_BUTTON: &str = "Potrdi udeležbo";
    pub const LOCATIONS_BUTTON: &str = "Poglej lokacije";
}

pub mod sections {
    pub const COUNTDOWN_TITLE: &str = "Skupaj odštevajmo do";
    pub const COUNTDOWN_SUBTITLE: &str = "najinega posebnega dne";
    pub const COUNTDOWN_DONE: &str = "Danes je najin dan!";
    pub const COUNTDOWN_UNITS: [&str; 4] = ["dni", "ur", "minut", "sekund"];
    pub const DETAILS_TITLE: &str = "Podrobnosti";
    pub const DETAILS_SUBTITLE: &str =
        "Vesela bova, če se nama pridružiš, da lahko najin dan praznujeva še s tabo!";
    pub const DETAILS_NONE: &str = "Podrobnosti dogodkov so na voljo v osebnem vabilu.";
    pub const GALLERY_TITLE: &str = "Utrinki";
    pub const GALLERY_SUBTITLE: &str = "Nekaj najinih najljubših trenutkov.";
    pub const GIFTS_TITLE: &str = "Seznam daril";
    pub const GIFTS_SUBTITLE: &str =
        "Ko izbereš darilo, se prečrta. Odznačiti ga lahko samo ista naprava, ki ga je označila.";
    pub const GIFTS_LOADING: &str = "Nalagam seznam daril…";
    pub const GIFTS_EMPTY: &str = "Seznam daril je trenutno prazen.";
    pub const RSVP_TITLE: &str = "Prosim sporoči";
    pub const RSVP_SUBTITLE: &str = "Sporoči svojo udeležbo do 20. 5. 2026";
    pub const RSVP_THANK_YOU_TITLE: &str = "Hvala!";
    pub const RSVP_THANK_YOU_TEXT: &str =
        "Tvoj odgovor sva prejela. Komaj čakava, da praznujeva skupaj!";
    pub const INVALID_LINK: &str = "Ta povezava ni veljavna. Prosim uporabi osebni link iz vabila.";
    pub const LOADING_INVITE: &str = "Nalagam tvoje vabilo…";
    pub const MADE_WITH: &str = "Ustvarjeno z";
}

pub mod gifts {
    pub const CLAIM: &str = "Izberi";
    pub const RELEASE: &str = "Prekliči";
    pub const TAKEN: &str = "Že izbrano";
    pub const SAVING: &str = "Shranjujem…";
    pub const LINK: &str = "Poglej";
}

pub mod rsvp {
    pub const NOTES_PLACEHOLDER: &str = "Alergije, posebne želje…";
    pub const SUBMIT: &str = "Pošlji odgovor";
    pub const SUBMITTING: &str = "Pošiljam…";
    pub const COMING: &str = "Ali prideš?";
    pub const YES: &str = "Pridem";
    pub const NO: &str = "Ne pridem";
    pub const HOW_MANY: &str = "Koliko vas pride?";
    pub const CHURCH_GAME: &str = "Koliko časa misliš, da bo trajala cerkvena poroka? (v minutah)";
    pub const NOTES: &str = "Opombe (neobvezno)";
    pub const SAVED_TITLE: &str = "Hvala!";
    pub const SAVED_TEXT: &str = "Tvoj odgovor je shranjen.";
    pub const FAILED_TITLE: &str = "Prišlo je do napake.";
}

const TRY_AGAIN: &str = "Poskusi še enkrat.";

/// Human text for a failed request
pub fn error_text(error: &RegistryError) -> String {
    match error {
        RegistryError::Transport(_) | RegistryError::Timeout => {
            format!("Strežnik ni dosegljiv. {}", TRY_AGAIN)
        }
        RegistryError::Status(code) => format!("HTTP {}", code),
        RegistryError::Server(Some(message)) => message.clone(),
        RegistryError::Server(None) => TRY_AGAIN.to_string(),
        RegistryError::Malformed(_) => "Strežnik je vrnil nepričakovan odgovor.".to_string(),
        RegistryError::ClaimedByOther(_) => "Darilo je že izbral nekdo drug.".to_string(),
        RegistryError::Pending(_) => "Sprememba se še shranjuje.".to_string(),
        RegistryError::UnknownItem(_) => "Darila ni več na seznamu.".to_string(),
        RegistryError::MissingToken => sections::INVALID_LINK.to_string(),
    }
}

/// Toast content for a registry notice
pub fn notice_toast(notice: &Notice) -> (ToastKind, String, Option<String>) {
    match notice {
        Notice::Claimed { name } => (
            ToastKind::Success,
            "Darilo izbrano".to_string(),
            Some(format!("{} je zdaj rezervirano zate.", name)),
        ),
        Notice::Released { name } => (
            ToastKind::Info,
            "Izbira preklicana".to_string(),
            Some(format!("{} je spet na voljo.", name)),
        ),
        Notice::ClaimRejected { name } => (
            ToastKind::Error,
            "Darilo je že izbrano".to_string(),
            Some(format!("{} je že izbral nekdo drug.", name)),
        ),
        Notice::Busy { name } => (
            ToastKind::Info,
            "Počakaj trenutek".to_string(),
            Some(format!("Spremembo za {} še shranjujem.", name)),
        ),
        Notice::UnknownItem { .. } => (
            ToastKind::Error,
            "Darila ni več na seznamu".to_string(),
            None,
        ),
        Notice::LoadFailed(error) => (
            ToastKind::Error,
            "Seznama daril ni bilo mogoče naložiti".to_string(),
            Some(error_text(error)),
        ),
        Notice::ToggleFailed { error, .. } => (
            ToastKind::Error,
            "Sprememba ni uspela".to_string(),
            Some(error_text(error)),
        ),
    }
}
