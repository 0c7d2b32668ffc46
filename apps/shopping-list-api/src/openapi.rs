//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping List API",
        version = "0.1.0",
        description = "In-memory shopping list: list, add, edit, mark purchased and delete items",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development server")
    ),
    nest(
        (path = "/items", api = domain_shopping_list::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Shopping list items")
    )
)]
pub struct ApiDoc;
