//! Ready-made agreements for demos and host-side tests.

use crate::agreement::{Agreement, NavigationPosition, Section, Style};
use crate::error::ConfigurationError;
use url::Url;

const TITLE: &str = "Terms & Conditions";

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Phasellus non \
pharetra ipsum, quis semper neque. Cras ac ante sapien. Etiam non felis fermentum, fermentum \
erat in, volutpat diam.\n\nQuisque nulla lorem, eleifend id nisl eget, ultrices consequat \
dolor. Phasellus purus erat, semper eget neque ut, sodales congue diam.";

const SAMPLE_SITE: &str = "https://www.example.com/";

/// A short alert-style agreement.
pub fn alert(affirmative: bool) -> Result<Agreement, ConfigurationError> {
    Agreement::builder(TITLE)
        .message("This is a primary agreement using the alert style.\n\nDo you understand?")
        .style(Style::Alert)
        .continue_label("I get it!")
        .cancel_label("Nope!")
        .requires_secondary_confirmation(affirmative)
        .build()
}

/// A few paragraphs shown in a full-page text view.
pub fn textbox(affirmative: bool, navigation: NavigationPosition) -> Result<Agreement, ConfigurationError> {
    Agreement::builder(TITLE)
        .message(format!(
            "This is a primary agreement. The text box style is designed for a few paragraphs of text.\n\n{LOREM}"
        ))
        .style(Style::Textbox(navigation))
        .continue_label("I'm Sure")
        .cancel_label("Nope!")
        .requires_secondary_confirmation(affirmative)
        .build()
}

/// Text sections interleaved with links, ending in an email call to action.
pub fn multipart(affirmative: bool, navigation: NavigationPosition) -> Result<Agreement, ConfigurationError> {
    let site = Url::parse(SAMPLE_SITE).ok();
    Agreement::builder(TITLE)
        .sections(vec![
            Section::text("Section 1", LOREM),
            Section::link("A. Website", site.clone()),
            Section::text("Section 2", LOREM),
            Section::link("B. Another Website", site.clone()),
            Section::text("Section 3", LOREM),
            Section::link("C. Even Another Website", site),
            Section::text("Section 4", LOREM),
            Section::call_to_action("Send via Email"),
        ])
        .style(Style::Multipart(navigation))
        .continue_label("I'm Sure")
        .cancel_label("Cancel")
        .requires_secondary_confirmation(affirmative)
        .build()
}

/// The stock second-step prompt.
pub fn affirmative_confirmation() -> Result<Agreement, ConfigurationError> {
    Agreement::builder("Affirmative Consent")
        .message("Are you sure you're sure?")
        .style(Style::Alert)
        .continue_label("Confirm")
        .cancel_label("Cancel")
        .build()
}
