#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "voxreel-api",
        description = "Text-to-speech relay for the VoxReel voiceover UI"
    ),
    paths(crate::routes::speech::generate, crate::routes::voices::list),
    tags((name = "tts", description = "Speech synthesis relay"))
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;
    ApiDoc::openapi()
}
