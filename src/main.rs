fn main() {
    if let Err(err) = spending_log::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
