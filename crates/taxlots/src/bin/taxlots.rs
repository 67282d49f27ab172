//! taxlots - replay a transaction log and report remaining tax lots.

fn main() -> std::process::ExitCode {
    taxlots::cmd::replay::main()
}
