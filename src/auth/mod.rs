mod user;

pub use user::User;

use axum::http::header::AUTHORIZATION;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{unauthorized_error, Error};

const DEFAULT_SECRET: &str = "your-secret-key";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

fn secret() -> String {
    std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.into())
}

pub fn decode_token(token: &str) -> Result<User, Error> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(User {
        username: data.claims.sub,
    })
}

pub async fn authenticate<B>(mut req: Request<B>, next: Next<B>) -> Result<Response, Error> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(unauthorized_error)?;

    let user = decode_token(token)?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;

    fn mint(sub: &str) -> String {
        let claims = Claims {
            sub: sub.into(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn decodes_a_valid_bearer_token() {
        let user = decode_token(&mint("alice")).unwrap();

        assert_eq!(user.username, "alice");
    }

    #[test]
    fn rejects_a_garbage_token() {
        assert!(decode_token("not-a-token").is_err());
    }
}
