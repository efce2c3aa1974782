use jsonwebtoken::{
  decode,
  encode,
  Algorithm,
  DecodingKey,
  EncodingKey,
  Header,
  TokenData,
  Validation,
};
use serde::{Deserialize, Serialize};

type Jwt = String;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// User id, standard subject claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  /// Tokens never expire, sessions end when the client drops the token.
  pub fn decode(jwt: &str, jwt_secret: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    decode::<Claims>(jwt, &DecodingKey::from_secret(jwt_secret.as_ref()), &validation)
  }

  pub fn jwt(user_id: i32, jwt_secret: &str, hostname: &str) -> Result<Jwt, jsonwebtoken::errors::Error> {
    let my_claims = Claims {
      sub: user_id,
      iss: hostname.to_string(),
      iat: chrono::Utc::now().timestamp(),
    };
    encode(
      &Header::default(),
      &my_claims,
      &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
  }
}
