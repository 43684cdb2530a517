fn main() -> eyre::Result<std::process::ExitCode> {
    iconkit::gen_icon_main()
}
