use anyhow::Result;
use mohan_types::Role;

use crate::presentation::presenters::present_sections;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(role: Role, json: bool) -> Result<()> {
    ConsoleRenderer::new(json).render(present_sections(role))
}
