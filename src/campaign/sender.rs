use anyhow::Context;
use lettre::message::header::{HeaderName, HeaderValue};
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use std::time::Duration;

use crate::configuration::CampaignSettings;

use super::content::current_issue;
use super::render::{recipient_links, render_issue};

#[derive(Debug, Default)]
pub struct CampaignReport {
    pub sent: u32,
    pub failed: u32,
}

pub struct CampaignMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl CampaignMailer {
    pub fn new(settings: &CampaignSettings) -> Result<Self, anyhow::Error> {
        let sender_email = settings
            .sender()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid sender email address.")?;
        let sender = Mailbox::new(
            Some(settings.sender_name.clone()),
            sender_email
                .as_ref()
                .parse()
                .context("Failed to parse the sender address.")?,
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp.host)
            .context("Failed to configure the SMTP relay.")?
            .port(settings.smtp.port)
            .timeout(Some(settings.smtp.timeout()))
            .credentials(Credentials::new(
                settings.smtp.username.clone(),
                settings.smtp.password.expose_secret().to_owned(),
            ))
            .build();

        Ok(Self { transport, sender })
    }

    pub fn build_message(
        &self,
        recipient: &str,
        cc_recipients: &[String],
        subject: &str,
        html_body: String,
        unsubscribe_link: &str,
    ) -> Result<Message, anyhow::Error> {
        let to: Mailbox = recipient
            .parse()
            .with_context(|| format!("{recipient} is not a valid recipient address."))?;

        let mut builder = Message::builder().from(self.sender.clone()).to(to);
        for cc in cc_recipients {
            let mailbox: Mailbox = cc
                .parse()
                .with_context(|| format!("{cc} is not a valid CC address."))?;
            builder = builder.cc(mailbox);
        }

        let mut message = builder
            .subject(subject)
            .singlepart(SinglePart::html(html_body))
            .context("Failed to build the newsletter message.")?;

        message.headers_mut().insert_raw(HeaderValue::new(
            HeaderName::new_from_ascii_str("List-Unsubscribe"),
            format!("<{unsubscribe_link}>"),
        ));

        Ok(message)
    }

    async fn send(&self, message: Message) -> Result<(), anyhow::Error> {
        self.transport
            .send(message)
            .await
            .context("SMTP transport rejected the message.")?;

        Ok(())
    }
}

/// Send the current issue to every configured recipient, one second apart.
///
/// A failure for one recipient is logged and counted; the remaining sends
/// still go out. Recipients come from configuration, not from the subscriber
/// table (the unsubscribe flag does not yet gate delivery, see DESIGN.md).
#[tracing::instrument(name = "Running newsletter campaign", skip(settings))]
pub async fn run_campaign(
    settings: &CampaignSettings,
    base_url: &str,
) -> Result<CampaignReport, anyhow::Error> {
    let (main_recipients, cc_recipients) = settings.recipient_lists();

    if main_recipients.is_empty() {
        tracing::warn!("No main recipients configured. Nothing to send.");
        return Ok(CampaignReport::default());
    }

    let issue = current_issue();
    tracing::info!(
        articles = issue.article_count(),
        recipients = main_recipients.len(),
        cc = cc_recipients.len(),
        "Loaded issue {}",
        issue.edition
    );

    let mailer = CampaignMailer::new(settings)?;
    let mut report = CampaignReport::default();

    for (i, recipient) in main_recipients.iter().enumerate() {
        if i > 0 {
            // Rate limit between sends.
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        let links = recipient_links(base_url, recipient);
        let html = render_issue(&issue, &links)
            .context("Failed to render the newsletter issue.")?;

        let outcome = match mailer.build_message(
            recipient,
            &cc_recipients,
            &settings.subject,
            html,
            &links.unsubscribe,
        ) {
            Ok(message) => mailer.send(message).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Newsletter sent to {recipient}");
                report.sent += 1;
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send newsletter to {recipient}"
                );
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        sent = report.sent,
        failed = report.failed,
        "Campaign finished"
    );

    Ok(report)
}
