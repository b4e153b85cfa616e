use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{
    agent::Agent,
    error::AgentResult,
    utils::{
        prompt::{MenuChoice, Prompt},
        qr::render_qr,
    },
};

const ISSUER_MENU: &str = "(4) Create New Invitation / (X) Exit? ";
const QR_HINT: &str = "Scan the following QR code to accept the invitation from a mobile agent.";

impl Agent {
    /// Issuer role. Checks the ledger and the revocation ordering, then hands
    /// out invitations until the operator exits. Returns the ids of the
    /// invitations created.
    pub async fn run_boe<R, W>(
        &self,
        revocation: bool,
        prompt: &mut Prompt<R, W>,
    ) -> AgentResult<Vec<String>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let ledger = self.ledger_info().await?;
        let session = self.sessions().begin_boe_run(&ledger, revocation)?;
        info!(
            "Issuer run {} on ledger {}, revocation {}",
            session.boe_runs,
            session.ledger_url,
            if revocation { "enabled" } else { "disabled" }
        );

        let mut created = Vec::new();
        loop {
            let sender = self.out_of_band().create_invitation()?;
            let url = sender.invitation_to_url(&self.config().issuer_endpoint())?;

            prompt.print("Invitation Data:").await?;
            prompt.print(&sender.invitation_to_json_string()?).await?;
            prompt.print(&format!("Invitation URL: {url}")).await?;
            prompt.print(QR_HINT).await?;
            prompt.print(&render_qr(url.as_str())?).await?;
            created.push(sender.get_id());

            match prompt.menu(ISSUER_MENU, "4").await? {
                MenuChoice::Repeat => continue,
                MenuChoice::Exit => break,
            }
        }
        info!("Issuer exiting after {} invitation(s)", created.len());
        Ok(created)
    }
}
