//! Resource Links Component

use leptos::prelude::*;

use crate::components::{MicrosoftLogo, TerraformLogo};
use crate::sheet::{LinkKind, ResourceLink};

/// Outbound documentation links; each opens in a new tab
#[component]
pub fn ResourceLinks(links: Vec<ResourceLink>) -> impl IntoView {
    view! {
        <div class="resource-links">
            {links.into_iter().map(|link| {
                let logo = match link.kind {
                    LinkKind::Terraform => view! { <TerraformLogo width=24 height=24 /> }.into_any(),
                    LinkKind::MicrosoftLearn => view! { <MicrosoftLogo width=24 height=24 /> }.into_any(),
                };
                view! {
                    <a class="resource-link" href=link.href target="_blank" rel="noopener noreferrer">
                        <span class="resource-link-logo">{logo}</span>
                        <span>{link.kind.label()}</span>
                    </a>
                }
            }).collect_view()}
        </div>
    }
}
