use std::sync::Arc;

use pdfgate_core::{config::Config, errors::Error, pdf};

#[tokio::main]
async fn main() -> Result<(), pdfgate_core::Error> {
    pdfgate_core::logging::init("pdfgate")?;

    let cfg = Arc::new(Config::load()?);

    // Refuse to run while the document we hand out is unreadable.
    if !pdf::verify(&cfg.pdf_path) {
        tracing::error!("PDF file is missing or invalid");
        return Err(Error::Config(format!(
            "PDF_PATH {} is missing or not a valid PDF",
            cfg.pdf_path.display()
        )));
    }

    pdfgate_telegram::server::run_webhook(cfg)
        .await
        .map_err(|e| Error::External(format!("webhook server failed: {e}")))?;

    Ok(())
}
