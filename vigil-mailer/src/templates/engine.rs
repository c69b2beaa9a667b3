use crate::{MailerError, templates::TemplateData};
use askama::Template;
use async_trait::async_trait;

/// Rendering seam for mail bodies.
///
/// Templates are addressed by name so the notification services stay ignorant
/// of the concrete engine. The built-in implementation maps names onto
/// compiled askama templates; host applications may provide their own.
#[async_trait]
pub trait TemplateEngine: Send + Sync {
    async fn render_text(
        &self,
        template_name: &str,
        data: TemplateData,
    ) -> Result<String, MailerError>;

    async fn render_html(
        &self,
        template_name: &str,
        data: TemplateData,
    ) -> Result<String, MailerError>;
}

#[derive(Debug, Clone, Default)]
pub struct AskamaTemplateEngine;

impl AskamaTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TemplateEngine for AskamaTemplateEngine {
    async fn render_text(
        &self,
        template_name: &str,
        data: TemplateData,
    ) -> Result<String, MailerError> {
        match template_name {
            "recovery" => {
                let template = crate::templates::RecoveryTextTemplate::from_data(&data)?;
                Ok(template.render()?)
            }
            "login_notice" => {
                let template = crate::templates::LoginNoticeTemplate::from_data(&data)?;
                Ok(template.render()?)
            }
            "login_warning" => {
                let template = crate::templates::LoginWarningTemplate::from_data(&data)?;
                Ok(template.render()?)
            }
            _ => Err(MailerError::UnknownTemplate(template_name.to_string())),
        }
    }

    async fn render_html(
        &self,
        template_name: &str,
        data: TemplateData,
    ) -> Result<String, MailerError> {
        match template_name {
            "recovery" => {
                let template = crate::templates::RecoveryHtmlTemplate::from_data(&data)?;
                Ok(template.render()?)
            }
            _ => Err(MailerError::UnknownTemplate(template_name.to_string())),
        }
    }
}
