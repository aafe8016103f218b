fn main() {
    scaffoldr::app::cli::run();
}
