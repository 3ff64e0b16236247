use responder::Responder;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) responder: std::sync::Arc<Responder>,
}
