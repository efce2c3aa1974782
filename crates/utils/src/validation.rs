use regex::Regex;
use std::sync::LazyLock;
use url::Url;

#[allow(clippy::expect_used)]
static VALID_USERNAME_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

// Only allow characters from a single alphabet per name. This avoids problems
// with lookalike characters like `o` which looks identical in Latin and
// Cyrillic. Checks for additional alphabets can be added in the same way.
#[allow(clippy::expect_used)]
static VALID_PERSON_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[a-zA-Z]+(?:[ '-][a-zA-Z]+)*|\p{Cyrillic}+(?:[ '-]\p{Cyrillic}+)*)$")
    .expect("compile regex")
});

#[allow(clippy::expect_used)]
static VALID_GROUP_SLUG_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("compile regex"));

// Simplified to the address shapes this instance actually accepts, no
// quoted local parts or ip-literal hosts.
#[allow(clippy::expect_used)]
static VALID_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
    .expect("compile regex")
});

const POST_TEXT_MAX_LENGTH: usize = 10_000;
const COMMENT_TEXT_MAX_LENGTH: usize = 3000;
const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 30;
const PERSON_NAME_MAX_LENGTH: usize = 150;
const GROUP_TITLE_MAX_LENGTH: usize = 200;
const GROUP_SLUG_MAX_LENGTH: usize = 100;
const IMAGE_URL_MAX_LENGTH: usize = 2000;
const ALLOWED_IMAGE_SCHEMES: [&str; 2] = ["http", "https"];

pub fn is_valid_post_text(text: &str) -> Result<(), &'static str> {
  required_check(text)?;
  max_length_check(text, POST_TEXT_MAX_LENGTH, "ensure this value is at most 10000 characters")
}

pub fn is_valid_comment_text(text: &str) -> Result<(), &'static str> {
  required_check(text)?;
  max_length_check(text, COMMENT_TEXT_MAX_LENGTH, "ensure this value is at most 3000 characters")
}

pub fn is_valid_username(name: &str) -> Result<(), &'static str> {
  min_length_check(name, USERNAME_MIN_LENGTH, "ensure this value is at least 3 characters")?;
  max_length_check(name, USERNAME_MAX_LENGTH, "ensure this value is at most 30 characters")?;
  if VALID_USERNAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err("enter a valid username, only letters, digits and underscores")
  }
}

/// First and last names, a single alphabet each with inner spaces, hyphens
/// and apostrophes.
pub fn is_valid_person_name(name: &str) -> Result<(), &'static str> {
  required_check(name)?;
  max_length_check(name, PERSON_NAME_MAX_LENGTH, "ensure this value is at most 150 characters")?;
  if VALID_PERSON_NAME_REGEX.is_match(name.trim()) {
    Ok(())
  } else {
    Err("enter a valid name")
  }
}

pub fn is_valid_email(email: &str) -> Result<(), &'static str> {
  required_check(email)?;
  if VALID_EMAIL_REGEX.is_match(email) {
    Ok(())
  } else {
    Err("enter a valid email address")
  }
}

pub fn is_valid_group_title(title: &str) -> Result<(), &'static str> {
  required_check(title)?;
  max_length_check(title, GROUP_TITLE_MAX_LENGTH, "ensure this value is at most 200 characters")
}

pub fn is_valid_group_slug(slug: &str) -> Result<(), &'static str> {
  required_check(slug)?;
  max_length_check(slug, GROUP_SLUG_MAX_LENGTH, "ensure this value is at most 100 characters")?;
  if VALID_GROUP_SLUG_REGEX.is_match(slug) {
    Ok(())
  } else {
    Err("enter a valid slug, only lowercase letters, digits and hyphens")
  }
}

pub fn is_valid_group_description(description: &str) -> Result<(), &'static str> {
  required_check(description)
}

/// Parses an image attachment address submitted with a post.
pub fn is_valid_image_url(url: &str) -> Result<Url, &'static str> {
  max_length_check(url, IMAGE_URL_MAX_LENGTH, "ensure this value is at most 2000 characters")?;
  let url = Url::parse(url).map_err(|_| "enter a valid url")?;
  if ALLOWED_IMAGE_SCHEMES.contains(&url.scheme()) {
    Ok(url)
  } else {
    Err("enter a valid http or https url")
  }
}

fn required_check(item: &str) -> Result<(), &'static str> {
  if item.trim().is_empty() {
    Err("this field is required")
  } else {
    Ok(())
  }
}

/// Input length limits count UTF-16 code units, the same method HTML
/// frontends use for the `maxlength` attribute.
/// https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes/maxlength
fn max_length_check(item: &str, max_length: usize, max_msg: &'static str) -> Result<(), &'static str> {
  let len = item.encode_utf16().count();
  if len > max_length {
    Err(max_msg)
  } else {
    Ok(())
  }
}

fn min_length_check(item: &str, min_length: usize, min_msg: &'static str) -> Result<(), &'static str> {
  let len = item.encode_utf16().count();
  if len < min_length {
    Err(min_msg)
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {

  use crate::validation::{
    is_valid_comment_text,
    is_valid_email,
    is_valid_group_slug,
    is_valid_group_title,
    is_valid_image_url,
    is_valid_person_name,
    is_valid_post_text,
    is_valid_username,
    POST_TEXT_MAX_LENGTH,
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_valid_post_text() {
    assert!(is_valid_post_text("Текст из формы").is_ok());
    assert!(is_valid_post_text("a plain post").is_ok());
    assert!(is_valid_post_text("x".repeat(POST_TEXT_MAX_LENGTH).as_str()).is_ok());

    assert!(is_valid_post_text("").is_err());
    assert!(is_valid_post_text("   \n \t ").is_err());
    assert!(is_valid_post_text("x".repeat(POST_TEXT_MAX_LENGTH + 1).as_str()).is_err());
    assert_eq!(is_valid_post_text(""), Err("this field is required"));
  }

  #[test]
  fn test_valid_comment_text() {
    assert!(is_valid_comment_text("Комментарий из формы").is_ok());
    assert!(is_valid_comment_text("").is_err());
    assert!(is_valid_comment_text("   ").is_err());
  }

  #[test]
  fn test_valid_username() {
    assert!(is_valid_username("auth").is_ok());
    assert!(is_valid_username("HasNoName").is_ok());
    assert!(is_valid_username("user_98").is_ok());

    // too short
    assert!(is_valid_username("ab").is_err());
    // dash
    assert!(is_valid_username("has-no-name").is_err());
    // spaces
    assert!(is_valid_username("has no name").is_err());
    // non-ascii letters
    assert!(is_valid_username("Владимир").is_err());
    assert!(is_valid_username("x".repeat(31).as_str()).is_err());
  }

  #[test]
  fn test_valid_person_name() {
    assert!(is_valid_person_name("Leo").is_ok());
    assert!(is_valid_person_name("Лев").is_ok());
    assert!(is_valid_person_name("Anne-Marie").is_ok());
    assert!(is_valid_person_name("O'Brien").is_ok());

    // mixed scripts
    assert!(is_valid_person_name("Лев Leo").is_err());
    assert!(is_valid_person_name("").is_err());
    assert!(is_valid_person_name("Leo7").is_err());
    assert!(is_valid_person_name("x".repeat(151).as_str()).is_err());
  }

  #[test]
  fn test_valid_email() {
    assert!(is_valid_email("auth@zhurnal.example").is_ok());
    assert!(is_valid_email("first.last+tag@example.com").is_ok());

    assert!(is_valid_email("").is_err());
    assert!(is_valid_email("not an email").is_err());
    assert!(is_valid_email("missing@tld@example.com").is_err());
  }

  #[test]
  fn test_valid_group_fields() {
    assert!(is_valid_group_title("Тестовая группа").is_ok());
    assert!(is_valid_group_title("").is_err());
    assert!(is_valid_group_title("x".repeat(201).as_str()).is_err());

    assert!(is_valid_group_slug("test-slug").is_ok());
    assert!(is_valid_group_slug("slug").is_ok());
    assert!(is_valid_group_slug("Test-Slug").is_err());
    assert!(is_valid_group_slug("test slug").is_err());
    assert!(is_valid_group_slug("-slug").is_err());
    assert!(is_valid_group_slug("").is_err());
  }

  #[test]
  fn test_valid_image_url() {
    assert!(is_valid_image_url("https://img.example/small.gif").is_ok());
    assert!(is_valid_image_url("http://img.example/posts/small.gif").is_ok());

    assert!(is_valid_image_url("small.gif").is_err());
    assert!(is_valid_image_url("ftp://img.example/small.gif").is_err());
    assert!(is_valid_image_url("javascript:alert(1)").is_err());
  }
}
