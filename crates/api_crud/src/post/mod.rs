pub mod create;
pub mod read;
pub mod update;

use zhurnal_api_common::post::CreatePost;
use zhurnal_db_schema::newtypes::DbUrl;
use zhurnal_utils::{
  error::{FieldErrors, ZhurnalResult},
  validation::{is_valid_image_url, is_valid_post_text},
};

/// Checks a submitted post form field by field, collecting every failure so
/// the form can be re-rendered with all of them at once.
pub(crate) fn validate_post_form(data: &CreatePost) -> ZhurnalResult<Option<DbUrl>> {
  let mut errors = FieldErrors::new();
  errors.check("text", is_valid_post_text(&data.text));

  let image = match &data.image {
    Some(url) => match is_valid_image_url(url) {
      Ok(url) => Some(url.into()),
      Err(message) => {
        errors.add("image", message);
        None
      }
    },
    None => None,
  };

  errors.into_result()?;
  Ok(image)
}
