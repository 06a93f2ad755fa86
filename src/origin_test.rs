use super::*;
use crate::constants::DEV_FRONTEND_ORIGIN;

mod list {
    use super::*;

    #[test]
    fn when_values_have_trailing_slash_and_duplicates_should_normalize() {
        // Arrange & Act
        let origins = AllowedOrigins::list([
            "http://localhost:8080/",
            " HTTP://LOCALHOST:8080 ",
            "https://app.example.com",
        ]);

        // Assert
        assert_eq!(
            origins.values(),
            &[
                "http://localhost:8080".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn when_only_wildcard_should_collapse_to_any() {
        // Arrange & Act
        let origins = AllowedOrigins::list(["*"]);

        // Assert
        assert!(origins.is_any());
        assert!(origins.values().is_empty());
    }

    #[test]
    fn when_wildcard_mixed_with_origins_should_keep_list() {
        // Arrange & Act
        let origins = AllowedOrigins::list(["*", DEV_FRONTEND_ORIGIN]);

        // Assert
        assert!(!origins.is_any());
        assert_eq!(origins.values().len(), 2);
    }

    #[test]
    fn when_collected_from_iterator_should_match_list() {
        // Arrange & Act
        let origins: AllowedOrigins = vec![DEV_FRONTEND_ORIGIN].into_iter().collect();

        // Assert
        assert_eq!(origins, AllowedOrigins::list([DEV_FRONTEND_ORIGIN]));
    }
}

mod resolve {
    use super::*;

    #[test]
    fn when_origin_missing_should_skip() {
        // Arrange
        let origins = AllowedOrigins::list([DEV_FRONTEND_ORIGIN]);

        // Act & Assert
        assert_eq!(origins.resolve(None), OriginDecision::Skip);
        assert_eq!(origins.resolve(Some("")), OriginDecision::Skip);
    }

    #[test]
    fn when_origin_listed_should_echo_request_value() {
        // Arrange
        let origins = AllowedOrigins::list([DEV_FRONTEND_ORIGIN]);

        // Act
        let decision = origins.resolve(Some("http://LOCALHOST:8080"));

        // Assert
        assert_eq!(
            decision,
            OriginDecision::Exact("http://LOCALHOST:8080".to_string())
        );
    }

    #[test]
    fn when_origin_not_listed_should_disallow() {
        // Arrange
        let origins = AllowedOrigins::list([DEV_FRONTEND_ORIGIN]);

        // Act & Assert
        assert_eq!(
            origins.resolve(Some("http://evil.example.com")),
            OriginDecision::Disallow
        );
        assert_eq!(
            origins.resolve(Some("http://localhost:8081")),
            OriginDecision::Disallow
        );
    }

    #[test]
    fn when_any_should_return_any_for_present_origin() {
        // Arrange
        let origins = AllowedOrigins::any();

        // Act & Assert
        assert_eq!(
            origins.resolve(Some("https://anything.test")),
            OriginDecision::Any
        );
    }

    #[test]
    fn when_origin_exceeds_length_limit_should_disallow() {
        // Arrange
        let origins = AllowedOrigins::any();
        let origin = format!("https://{}.test", "a".repeat(MAX_ORIGIN_LENGTH));

        // Act & Assert
        assert_eq!(origins.resolve(Some(&origin)), OriginDecision::Disallow);
    }
}

mod varies_by_origin {
    use super::*;

    #[test]
    fn when_list_should_vary_and_when_any_should_not() {
        assert!(AllowedOrigins::list([DEV_FRONTEND_ORIGIN]).varies_by_origin());
        assert!(!AllowedOrigins::any().varies_by_origin());
    }
}

mod is_same_origin {
    use super::*;

    #[test]
    fn when_scheme_host_and_port_agree_should_match() {
        // Arrange & Act
        let same = is_same_origin("http://localhost:8080", "http", "localhost:8080");

        // Assert
        assert!(same);
    }

    #[test]
    fn when_port_is_the_scheme_default_should_match() {
        // Arrange & Act
        let explicit =
            is_same_origin("https://shop.example.com", "https", "shop.example.com:443");
        let implied = is_same_origin("HTTPS://Shop.Example.com", "https", "shop.example.com");

        // Assert
        assert!(explicit);
        assert!(implied);
    }

    #[test]
    fn when_port_or_scheme_differs_should_not_match() {
        // Arrange & Act
        let other_port = is_same_origin(DEV_FRONTEND_ORIGIN, "http", "localhost:3000");
        let other_scheme = is_same_origin("https://localhost:8080", "http", "localhost:8080");

        // Assert
        assert!(!other_port);
        assert!(!other_scheme);
    }

    #[test]
    fn when_origin_is_opaque_or_malformed_should_not_match() {
        // Arrange & Act
        let opaque = is_same_origin("null", "http", "localhost:8080");
        let empty_host = is_same_origin(DEV_FRONTEND_ORIGIN, "http", "");

        // Assert
        assert!(!opaque);
        assert!(!empty_host);
    }
}
