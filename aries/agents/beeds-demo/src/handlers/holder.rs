use tokio::io::{AsyncBufRead, AsyncWrite};

use super::out_of_band::receiver::OutOfBandReceiver;
use crate::{
    agent::Agent,
    error::*,
    utils::prompt::{MenuChoice, Prompt},
};

const INVITE_PROMPT: &str = "Invite details: ";
const HOLDER_MENU: &str = "(4) Input New Invitation / (X) Exit? ";

impl Agent {
    /// Holder role. Reads invitations from the operator, consumes each one
    /// and reports how the handshake would proceed. Returns the ids of the
    /// invitations consumed.
    pub async fn run_beed_user<R, W>(&self, prompt: &mut Prompt<R, W>) -> AgentResult<Vec<String>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.ledger_info().await?;

        let mut consumed = Vec::new();
        loop {
            let Some(receiver) = self.read_invitation(prompt).await? else {
                break;
            };
            let id = receiver.get_id();
            self.out_of_band().consume_invitation(&id)?;

            for status in receiver.probe_endpoints().await {
                if !status.reachable {
                    warn!(
                        "Service endpoint {} of invitation {} is not reachable",
                        status.endpoint, id
                    );
                }
            }

            let handshake = receiver.preferred_handshake()?;
            let endpoints = receiver.service_endpoints().join(", ");
            info!("Invitation {id}: handshake {handshake} via {endpoints}");
            prompt
                .print(&format!(
                    "Accepted invitation {id}, handshake {handshake} via {endpoints}"
                ))
                .await?;
            consumed.push(id);

            match prompt.menu(HOLDER_MENU, "4").await? {
                MenuChoice::Repeat => continue,
                MenuChoice::Exit => break,
            }
        }
        Ok(consumed)
    }

    /// Prompts until the operator provides a usable invitation. Returns
    /// `None` once the input is exhausted.
    async fn read_invitation<R, W>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> AgentResult<Option<OutOfBandReceiver>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            let Some(details) = prompt.ask_block(INVITE_PROMPT).await? else {
                return Ok(None);
            };
            if details.is_empty() {
                continue;
            }

            let received = self
                .out_of_band()
                .receive_invitation(&details)
                .and_then(|receiver| receiver.preferred_handshake().map(|_| receiver));
            match received {
                Ok(receiver) => return Ok(Some(receiver)),
                Err(err)
                    if matches!(
                        err.kind(),
                        AgentErrorKind::InvalidInvitation
                            | AgentErrorKind::InvitationAlreadyConsumed
                    ) =>
                {
                    error!("Invalid invitation, try again: {err}");
                    prompt.print(&format!("Invalid invitation: {err}")).await?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
