use anyhow::Result;

use pragma_includes::{includes_of, SourceBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let source = SourceBuf::from(
        "#pragma use \"test-data/nested/main.frag\"\n\
         #pragma use \"test-data/diamond/root.frag\"\n",
    );
    let included_files = includes_of(&source)?;
    println!("{:#?}", included_files);
    Ok(())
}
