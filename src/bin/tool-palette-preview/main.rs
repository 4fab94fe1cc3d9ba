//! Helper tool rendering sample palettes for every sentiment category

mod preview;

fn main() -> anyhow::Result<()> {
    preview::run()
}
