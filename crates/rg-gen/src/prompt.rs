//! Prompt assembly for reply generation.
//!
//! The template is a contract: preamble, mission, the four authoring
//! directives, the delimited inbound email, the sender attribution line and
//! the no-headers instruction, in that order. Output quality depends on this
//! structure, so it stays deterministic.

use rg_core::Settings;

/// Build the full generation prompt for one inbound email.
pub fn build_prompt(settings: &Settings, inbound_email: &str) -> String {
    format!(
        r#"You are a member of the marketing team for "Seamless Source."
Your product is a "DPP (Digital Product Passport)" for the fashion industry.
Your goal is to reply to an incoming email from a potential client.
Your company mission is: "{mission}"

Your reply must be:
1.  Polite, professional, and caring.
2.  Written from the perspective of a team member at "Seamless Source."
3.  Focused on addressing the client's inquiry while subtly but clearly highlighting the value and importance of our DPP product.
4.  Designed to push the client towards a next step, such as a product demo or a call.

Incoming Email from client:
---
{inbound}
---

Reply as if you are the sender: {sender}
Do not include "Subject:" or any email headers. Just the body of the email.
"#,
        mission = settings.mission,
        inbound = inbound_email,
        sender = settings.sender_line(),
    )
}
