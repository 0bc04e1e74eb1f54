use env_logger::fmt::Formatter;
use env_logger::Env;
use log::Record;
use std::io::Write;

/// Installs the env_logger backend. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let env = Env::default().default_filter_or(default_filter);
    match env_logger::Builder::from_env(env)
        .format(format_record)
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // Already installed, tests call this more than once
        }
    }
}

// [LEVEL] 2024-05-01T10:00:00.000 - api/client/client.rs:120 message
fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let module = module_dir(record.target());
    let file_name = record
        .file()
        .and_then(|f| f.rsplit('/').next())
        .unwrap_or("unknown");

    writeln!(
        buf,
        "[{}] {} - {}/{}:{} {}",
        record.level(),
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        module,
        file_name,
        record.line().unwrap_or(0),
        record.args()
    )
}

fn module_dir(target: &str) -> String {
    target
        .strip_prefix("libschooldesk::")
        .unwrap_or(target)
        .rsplit_once("::")
        .map(|(path, _)| path.replace("::", "/"))
        .unwrap_or_else(|| target.replace("::", "/"))
}
