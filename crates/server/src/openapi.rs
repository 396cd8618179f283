use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

/// Client error body.
#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

/// Server error body carrying the underlying failure text.
#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct PersonDoc {
    pub name: String,
    pub confirmed: bool,
}

#[derive(ToSchema)]
pub struct ConvidadoDoc {
    pub code: String,
    pub host: PersonDoc,
    pub conjuge: Option<PersonDoc>,
    pub dependentes: Vec<PersonDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::guests::create_guest,
        crate::routes::guests::list_guests,
        crate::routes::guests::get_guest,
        crate::routes::guests::update_guest,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            DetailDoc,
            ErrorDoc,
            PersonDoc,
            ConvidadoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "convidados")
    )
)]
pub struct ApiDoc;
