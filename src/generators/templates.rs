use tera::{Context, Tera};

/// Create and configure a Tera engine holding every scaffold template
pub fn create_template_engine() -> Result<Tera, String> {
    let mut tera = Tera::default();
    // Rust sources are never HTML-escaped, whatever their template name
    tera.autoescape_on(vec![]);

    register_templates(&mut tera)?;

    Ok(tera)
}

/// Register scaffold templates from embedded strings
fn register_templates(tera: &mut Tera) -> Result<(), String> {
    crate::template!(tera, "scaffold/raffle.rs.tera", "templates/raffle.rs.tera");
    crate::template!(tera, "scaffold/voting.rs.tera", "templates/voting.rs.tera");

    Ok(())
}

/// Render a template with the given context
pub fn render(tera: &Tera, template_name: &str, context: &Context) -> Result<String, String> {
    tera.render(template_name, context).map_err(|e| {
        let mut error_msg = format!("Failed to render template '{}': {}", template_name, e);

        if let Some(source) = std::error::Error::source(&e) {
            error_msg.push_str(&format!("\nSource: {}", source));
        }

        error_msg
    })
}

/// Render a scaffold body for `contract_name`, degrading to an empty body
pub fn render_scaffold(tera: &Tera, template_name: &str, contract_name: &str) -> String {
    let mut context = Context::new();
    context.insert("contract_name", contract_name);

    render(tera, template_name, &context).unwrap_or_else(|e| {
        eprintln!("Template rendering failed for {}: {}", template_name, e);
        String::new()
    })
}
