use tera::Tera;
use tracing::info;

/// Loads every template matching the glob into one shared engine. Handlers
/// only name a template and hand over a context; markup stays out of them.
pub fn load_templates(glob: &str) -> Result<Tera, tera::Error> {
    let tera = Tera::new(glob)?;
    info!(
        count = tera.get_template_names().count(),
        "templates loaded"
    );
    Ok(tera)
}
