//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and wire schema. The generated
//! document backs Swagger UI at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Film, FilmPayload, User, UserPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmorate API",
        description = "In-memory film and user catalogue: list, create, and replace."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::films::list_films,
        crate::inbound::http::films::create_film,
        crate::inbound::http::films::update_film,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Film, FilmPayload, User, UserPayload, Error, ErrorCode)),
    tags(
        (name = "films", description = "Film catalogue operations"),
        (name = "users", description = "User account operations"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn film_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let film = schemas.get("Film").expect("Film schema");

        assert_object_schema_has_field(film, "id");
        assert_object_schema_has_field(film, "releaseDate");
        assert_object_schema_has_field(film, "duration");
    }

    #[test]
    fn user_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user = schemas.get("User").expect("User schema");

        assert_object_schema_has_field(user, "email");
        assert_object_schema_has_field(user, "login");
        assert_object_schema_has_field(user, "birthday");
    }

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in ["/films", "/users", "/health/ready", "/health/live"] {
            assert!(paths.contains_key(path), "missing path '{path}'");
        }
    }
}
