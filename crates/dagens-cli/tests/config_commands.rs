use dagens_runtime::Config;
use dagens_testing::TestWorld;

#[test]
fn test_config_init_writes_defaults() {
    let world = TestWorld::new();
    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let written = Config::load_from(&world.config_path()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let world = TestWorld::new();
    assert!(world.run(&["config", "init"]).unwrap().success());

    let again = world.run(&["config", "init"]).unwrap();
    assert!(!again.success());
    assert!(again.stderr().contains("--force"));

    assert!(world.run(&["config", "init", "--force"]).unwrap().success());
}

#[test]
fn test_config_show_reflects_file() {
    let mut config = Config::default();
    config.onthisday.primary_language = "nb".to_string();
    config.onthisday.max_items = 3;
    let world = TestWorld::new().with_config(&config);

    let result = world.run(&["--format", "json", "config", "show"]).unwrap();
    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["onthisday"]["primary_language"], "nb");
    assert_eq!(json["onthisday"]["max_items"], 3);
    assert_eq!(json["onthisday"]["cache_ttl_secs"], 21600);
    assert_eq!(json["currency"]["base_currency"], "NOK");

    let plain = world.run(&["config", "show"]).unwrap();
    assert!(plain.stdout().contains("[onthisday]"));
    assert!(plain.stdout().contains("primary_language = \"nb\""));
}

#[test]
fn test_invalid_config_is_an_error() {
    let world = TestWorld::new();
    std::fs::write(world.config_path(), "[onthisday]\nmax_items = 0\n").unwrap();

    let result = world.run(&["config", "show"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("max_items"));
}

#[test]
fn test_no_subcommand_prints_guidance() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("dagens config init"));
    assert!(result.stdout().contains("dagens today"));
}
