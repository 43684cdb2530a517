fn main() -> eyre::Result<std::process::ExitCode> {
    iconkit::gen_iconset_main()
}
