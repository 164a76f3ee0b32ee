use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use business::domain::auth::model::AccessClaims;
use business::domain::auth::services::TokenService;

/// JWT bearer authentication. The token service is read from the request
/// data installed by the server.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub AccessClaims);

async fn jwt_bearer_checker(req: &Request, bearer: Bearer) -> Option<AccessClaims> {
    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!("Token service is not installed on the request");
        return None;
    };

    match tokens.validate(&bearer.token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!("Bearer authentication failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use security::jwt_token_service::JwtTokenService;
    use security::token_config::TokenConfig;

    fn tokens() -> Arc<dyn TokenService> {
        let config = TokenConfig::new("test-secret".to_string(), "HS256", 30).unwrap();
        Arc::new(JwtTokenService::new(&config))
    }

    fn request_with(tokens: Arc<dyn TokenService>) -> Request {
        let mut req = Request::builder().finish();
        req.set_data(tokens);
        req
    }

    #[tokio::test]
    async fn should_accept_valid_token() {
        let tokens = tokens();
        let issued = tokens.issue(5, None, None).unwrap();
        let req = request_with(tokens);

        let claims = jwt_bearer_checker(
            &req,
            Bearer {
                token: issued.access_token,
            },
        )
        .await;

        assert_eq!(claims.map(|c| c.subject_id), Some(5));
    }

    #[tokio::test]
    async fn should_reject_garbage_token() {
        let req = request_with(tokens());

        let claims = jwt_bearer_checker(
            &req,
            Bearer {
                token: "garbage".to_string(),
            },
        )
        .await;

        assert!(claims.is_none());
    }

    #[tokio::test]
    async fn should_reject_when_token_service_missing() {
        let req = Request::builder().finish();

        let claims = jwt_bearer_checker(
            &req,
            Bearer {
                token: "anything".to_string(),
            },
        )
        .await;

        assert!(claims.is_none());
    }
}
