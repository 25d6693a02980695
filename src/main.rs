fn main() {
    std::process::exit(screenpick::cli::run());
}
