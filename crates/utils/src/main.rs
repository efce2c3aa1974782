fn main() {
  println!("{}", config_to_string())
}

fn config_to_string() -> String {
  use doku::json::{AutoComments, CommentsStyle, Formatting, ObjectsStyle};
  use zhurnal_utils::settings::structs::Settings;
  let fmt = Formatting {
    auto_comments: AutoComments::none(),
    comments_style: CommentsStyle {
      separator: "#".to_owned(),
    },
    objects_style: ObjectsStyle {
      surround_keys_with_quotes: false,
      use_comma_as_separator: false,
    },
    ..Default::default()
  };
  doku::to_json_fmt_val(&fmt, &Settings::default())
}

/// Check if config/defaults.hjson is up to date. Run this binary and commit
/// its output whenever the settings structs change, then remove the ignore.
#[test]
#[ignore]
fn test_config_defaults_updated() -> zhurnal_utils::error::ZhurnalResult<()> {
  use pretty_assertions::assert_eq;

  let current_config = std::fs::read_to_string("../../config/defaults.hjson")?;
  let mut updated_config = config_to_string();
  updated_config.push('\n');
  assert_eq!(current_config, updated_config);

  Ok(())
}
