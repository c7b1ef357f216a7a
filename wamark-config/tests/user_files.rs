use std::fs;
use tempfile::tempdir;
use wamark_config::{ActionEntry, Loader, RelocationMode};
use wamark_editor::{EditableSurface, EditingHost};

#[test]
fn user_file_layers_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wamark.toml");
    fs::write(
        &path,
        r#"[convert]
relocation = "passes"
passes = 6

[editor]
default_paragraph_separator = "p"
style_with_css = true
actions = ["italic", { name = "bold", icon = "<b>B</b>" }, "quote"]

[editor.classes]
button = "btn"
"#,
    )
    .unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    assert_eq!(config.convert.relocation, RelocationMode::Passes);
    assert_eq!(config.convert.passes, 6);
    assert!(!config.convert.decode_nbsp);
    assert_eq!(config.editor.style_with_css, Some(true));
    assert_eq!(config.editor.classes.button, "btn");
    assert_eq!(config.editor.classes.actionbar, "pell-actionbar");
    assert_eq!(
        config.editor.actions[1],
        ActionEntry::Override {
            name: "bold".to_string(),
            icon: Some("<b>B</b>".to_string()),
            title: None,
        }
    );
}

#[test]
fn missing_required_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = Loader::new()
        .with_file(dir.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn missing_optional_file_is_ignored() {
    let dir = tempdir().unwrap();
    let config = Loader::new()
        .with_optional_file(dir.path().join("absent.toml"))
        .build()
        .unwrap();
    assert_eq!(config.editor.default_paragraph_separator, "div");
}

struct NullHost;

impl EditingHost for NullHost {
    fn exec(&mut self, _command: &wamark_editor::Command) -> bool {
        true
    }
    fn query_state(&self, _command: &str) -> bool {
        false
    }
    fn query_value(&self, _command: &str) -> String {
        String::new()
    }
    fn inner_html(&self) -> String {
        String::new()
    }
    fn set_inner_html(&mut self, _html: &str) {}
    fn first_child_is_text(&self) -> bool {
        false
    }
    fn focus(&mut self) {}
}

#[test]
fn configured_toolbar_reaches_the_surface() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wamark.toml");
    fs::write(
        &path,
        r#"[editor]
actions = [{ name = "strikethrough", title = "Strike" }, "underline"]
"#,
    )
    .unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    let surface =
        EditableSurface::initialize(config.editor.to_configuration(|_| {}), NullHost).unwrap();
    let titles: Vec<_> = surface
        .toolbar()
        .buttons
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Strike", "Underline"]);
    assert_eq!(surface.toolbar().buttons[0].icon, "<strike>Strike</strike>");
}
