use actix_web::web::{self, ServiceConfig};
use zhurnal_api::{
  cache::clear_cache,
  feed::{
    follow::get_follow_feed,
    group::get_group_feed,
    home::get_home_feed,
    profile::get_profile,
  },
  follow::{profile_follow, profile_unfollow},
};
use zhurnal_api_crud::{
  comment::create::create_comment,
  group::create::create_group,
  post::{
    create::{create_post, get_create_form},
    read::get_post,
    update::{get_edit_form, update_post},
  },
  user::create::signup,
};

/// Route table: trailing slashes everywhere, feeds on GET, form submissions
/// on POST.
pub fn config(cfg: &mut ServiceConfig) {
  cfg
    // feeds
    .service(web::resource("/").route(web::get().to(get_home_feed)))
    .service(web::resource("/group/{slug}/").route(web::get().to(get_group_feed)))
    .service(web::resource("/profile/{username}/").route(web::get().to(get_profile)))
    .service(web::resource("/follow/").route(web::get().to(get_follow_feed)))
    // posts
    .service(
      web::resource("/create/")
        .route(web::get().to(get_create_form))
        .route(web::post().to(create_post)),
    )
    .service(web::resource("/posts/{id}/").route(web::get().to(get_post)))
    .service(
      web::resource("/posts/{id}/edit/")
        .route(web::get().to(get_edit_form))
        .route(web::post().to(update_post)),
    )
    .service(web::resource("/posts/{id}/comment/").route(web::post().to(create_comment)))
    // the follow graph
    .service(web::resource("/profile/{username}/follow/").route(web::get().to(profile_follow)))
    .service(web::resource("/profile/{username}/unfollow/").route(web::get().to(profile_unfollow)))
    // administrative
    .service(web::resource("/users/signup/").route(web::post().to(signup)))
    .service(web::resource("/group/").route(web::post().to(create_group)))
    .service(web::resource("/cache/clear/").route(web::post().to(clear_cache)));
}
