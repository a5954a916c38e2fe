use crate::presentation::view_models::Notice;
use pokedex_client::Error;

pub fn present_error(error: &Error) -> Notice {
    match error {
        Error::NoSelector => Notice::warning("Empty Search", "Please enter a Pokémon name or ID"),
        Error::NotFound { key } => {
            Notice::error("Not Found", format!("Could not find Pokémon '{}'", key))
                .with_hint("Please check the spelling and try again.")
        }
        Error::Transport { .. } => Notice::error("Connection Error", error.to_string())
            .with_hint("Check your internet connection and try again."),
        Error::MalformedResponse(_) => Notice::error("Unexpected Response", error.to_string()),
        Error::Config(_) | Error::Io(_) => Notice::error("Error", error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::NoticeLevel;
    use pokedex_types::LookupKey;

    #[test]
    fn test_empty_search_is_a_warning() {
        let notice = present_error(&Error::NoSelector);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Empty Search");
        assert_eq!(notice.hint, None);
    }

    #[test]
    fn test_not_found_names_the_key() {
        let notice = present_error(&Error::NotFound {
            key: LookupKey::ByName("pikachuu".to_string()),
        });
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Could not find Pokémon 'pikachuu'");
        assert_eq!(
            notice.hint.as_deref(),
            Some("Please check the spelling and try again.")
        );
    }

    #[test]
    fn test_transport_mentions_connectivity() {
        let notice = present_error(&Error::transport(
            "http://127.0.0.1:9/pokemon/1",
            "connection refused",
        ));
        assert_eq!(notice.title, "Connection Error");
        assert!(notice.message.contains("Could not connect"));
    }

    #[test]
    fn test_malformed_response() {
        let notice = present_error(&Error::MalformedResponse("missing field `stats`".into()));
        assert_eq!(notice.title, "Unexpected Response");
        assert!(notice.message.contains("stats"));
    }
}
