use yew_gestures::components::app::App;
use yew_gestures::util::init_logging;

fn main() {
    init_logging(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
