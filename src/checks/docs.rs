//! Documentation check.

use super::check::{CheckContext, CheckId, VerifyCheck};
use super::outcome::{read_artifact, CheckOutcome, Finding};

/// Confirms the README mentions every install invocation.
pub struct DocumentationCheck;

impl VerifyCheck for DocumentationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("documentation")
    }

    fn description(&self) -> &str {
        "Checking documentation"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let docs = &ctx.config.docs;
        let content = match read_artifact(&ctx.resolve(&docs.path), &docs.path) {
            Ok(content) => content,
            Err(message) => return CheckOutcome::failed(message),
        };

        let name = docs.path.display();
        let missing: Vec<&str> = docs
            .required
            .iter()
            .map(String::as_str)
            .filter(|needle| !content.contains(*needle))
            .collect();

        if missing.is_empty() {
            return CheckOutcome::new(
                true,
                vec![Finding::pass(format!(
                    "{} contains installation instructions",
                    name
                ))],
            );
        }

        let findings = missing
            .iter()
            .map(|needle| Finding::fail(format!("{} does not mention '{}'", name, needle)))
            .collect();
        CheckOutcome::new(false, findings)
            .with_diagnostic(format!("{} missing installation instructions", name))
    }
}
