use std::io::IsTerminal;
use std::path::Path;

use tokio::io::AsyncReadExt;

/// Where command input comes from:
/// `-` reads stdin, an existing file is read, anything else is the data itself.
/// Without an argument stdin is read only when it is piped.
pub async fn resolve(arg: Option<&str>) -> std::io::Result<Option<String>> {
    match arg {
        Some("-") => read_stdin().await.map(Some),
        Some(arg) if is_file(arg).await => {
            let data = tokio::fs::read_to_string(arg).await?;
            Ok(Some(data.trim().to_string()))
        }
        Some(arg) => Ok(Some(arg.to_string())),
        None if !std::io::stdin().is_terminal() => read_stdin().await.map(Some),
        None => Ok(None),
    }
}

async fn is_file(arg: &str) -> bool {
    tokio::fs::metadata(Path::new(arg))
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn read_stdin() -> std::io::Result<String> {
    let mut data = String::new();
    tokio::io::stdin().read_to_string(&mut data).await?;
    Ok(data.trim().to_string())
}
