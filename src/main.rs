use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    carve::app::run()
}
