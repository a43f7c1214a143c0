use crate::{blueprint, errors, materialize, render};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SasslingError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] errors::MaterializeError),
}

/// Materializes the SCSS skeleton under the current working directory and,
/// on success, prints the rendered tree listing to stdout.
///
/// # Errors
///
/// Returns a [`SasslingError`] if any directory cannot be created or any
/// file cannot be written. Entries created before the failure are left on
/// disk; nothing is printed to stdout in that case.
pub fn generate() -> Result<(), SasslingError> {
    let tree = blueprint::skeleton();

    log::debug!(
        "materializing '{}' skeleton into the current directory",
        tree.name()
    );

    materialize::materialize(&tree, "")?;

    print!("{}", render::render(&tree));

    Ok(())
}
