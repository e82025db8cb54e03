use warren::model::pagination::EnvelopeStyle;
use warren::settings::Settings;

#[test]
fn load_settings_test() {
    let _ = env_logger::try_init();

    let settings = Settings::from_file("tests/config/warren.test.toml").unwrap();
    assert_eq!(settings.page_query_param, "p");
    assert_eq!(settings.envelope, EnvelopeStyle::Results);
    assert_eq!(settings.request_context().unwrap().base_url().as_str(), "http://testserver/api/");

    let paginator = settings.paginator();
    assert_eq!(paginator.page_query_param, "p");
    assert_eq!(paginator.style, EnvelopeStyle::Results);
}

#[test]
fn default_settings_test() {
    let _ = env_logger::try_init();

    let settings = Settings::from_file("tests/config/warren.test_default.toml").unwrap();
    assert_eq!(settings.base_url, "http://testserver/");
    assert_eq!(settings.page_query_param, "page");
    assert_eq!(settings.envelope, EnvelopeStyle::Document);
}

#[test]
fn missing_settings_file_test() {
    let _ = env_logger::try_init();

    assert!(Settings::from_file("tests/config/not_exist.toml").is_err());
}
