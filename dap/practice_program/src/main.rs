use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dap_practice::run(&mut out)?;
    out.flush()?;

    Ok(())
}
