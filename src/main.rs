use ssedit_studio::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SS Edit Studio portfolio website loaded successfully!");
    log::info!("Contact: {}", ssedit_studio::config::contact_email());
    yew::Renderer::<App>::new().render();
}
