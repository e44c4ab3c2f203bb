//! The compile-docs command-line executable.

fn main() -> anyhow::Result<()> {
    compile_docs::run()
}
