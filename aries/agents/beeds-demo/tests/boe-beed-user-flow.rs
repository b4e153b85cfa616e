mod common;

use beeds_demo::{agent::Role, AgentErrorKind};
use messages::decode_invitation_details;
use mockito::Server;
use tempfile::TempDir;

use crate::common::{
    prelude::*,
    test_agent::{agent, output_of, scripted_prompt},
    test_ledger::{mock_genesis, GENESIS},
    test_setup::setup_env_logging,
};

static LOGGING_INIT: std::sync::Once = std::sync::Once::new();

const SAMPLE_INVITATION: &str = r##"{"@type":"https://didcomm.org/out-of-band/1.1/invitation","@id":"9109c998-f26a-4dbd-8200-33c805e6af03","label":"boe.agent","handshake_protocols":["https://didcomm.org/didexchange/1.0"],"services":[{"id":"#inline","type":"did-communication","recipientKeys":["did:key:z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th"],"serviceEndpoint":"http://172.17.0.1:8020"}]}"##;

fn invitation_json_from(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(str::to_owned)
        .collect()
}

/// Row counts of the QR code printed after each invitation URL.
fn qr_blocks_after_urls(output: &str) -> Vec<usize> {
    output
        .split("Invitation URL: ")
        .skip(1)
        .map(|block| {
            block
                .lines()
                .skip(2)
                .take_while(|line| !line.is_empty() && line.chars().all(|c| " ▀▄█".contains(c)))
                .count()
        })
        .collect()
}

#[tokio::test]
async fn boe_creates_invitations_until_exit() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    let genesis = mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let boe = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: false });
    let mut prompt = scripted_prompt(&["4", "X"]);
    let created = boe.run_boe(false, &mut prompt).await?;

    genesis.assert_async().await;
    assert_eq!(created.len(), 2);
    assert_ne!(created[0], created[1]);

    let output = output_of(prompt);
    let invitations = invitation_json_from(&output);
    assert_eq!(invitations.len(), 2);
    for (json, id) in invitations.iter().zip(&created) {
        let invitation = decode_invitation_details(json)?;
        invitation.validate()?;
        assert_eq!(&invitation.id.to_string(), id);
    }
    assert!(output.contains("Invitation URL: http://172.17.0.1:8020/?oob="));
    assert_eq!(output.matches("Scan the following QR code").count(), 2);
    assert!(qr_blocks_after_urls(&output).iter().all(|rows| *rows > 10));
    assert!(output.contains("(4) Create New Invitation / (X) Exit?"));
    Ok(())
}

#[tokio::test]
async fn boe_revocation_requires_prior_run() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let revoking = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: true });
    let err = revoking
        .run_boe(true, &mut scripted_prompt(&["X"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::RevocationOutOfOrder);

    let plain = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: false });
    plain.run_boe(false, &mut scripted_prompt(&["X"])).await?;

    let revoking = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: true });
    let created = revoking.run_boe(true, &mut scripted_prompt(&["X"])).await?;
    assert_eq!(created.len(), 1);
    Ok(())
}

#[tokio::test]
async fn boe_revocation_resets_with_new_ledger() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    let first = mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let plain = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: false });
    plain.run_boe(false, &mut scripted_prompt(&["X"])).await?;
    first.remove_async().await;

    mock_genesis(&mut ledger, r#"{"txn":{"data":{"data":{"alias":"Node2"}}}}"#).await;
    let revoking = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: true });
    let err = revoking
        .run_boe(true, &mut scripted_prompt(&["X"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::RevocationOutOfOrder);
    Ok(())
}

#[tokio::test]
async fn ledger_down_fails_both_roles() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    ledger
        .mock("GET", "/genesis")
        .with_status(502)
        .create_async()
        .await;
    let state_dir = TempDir::new()?;

    let boe = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: false });
    let err = boe
        .run_boe(false, &mut scripted_prompt(&["X"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::LedgerUnreachable);

    let holder = agent(&ledger.url(), state_dir.path(), Role::BeedUser);
    let err = holder
        .run_beed_user(&mut scripted_prompt(&[SAMPLE_INVITATION]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::LedgerUnreachable);
    Ok(())
}

#[tokio::test]
async fn beed_user_reprompts_until_valid_invitation() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let holder = agent(&ledger.url(), state_dir.path(), Role::BeedUser);
    let inline_services = r##""services":[{"id":"#inline","type":"did-communication","recipientKeys":["did:key:z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th"],"serviceEndpoint":"http://172.17.0.1:8020"}]"##;
    let no_services = SAMPLE_INVITATION.replace(inline_services, r#""services":[]"#);
    let did_only = SAMPLE_INVITATION.replace(
        inline_services,
        r#""services":["did:sov:LjgpST2rjsoxYegQDRm7EL"]"#,
    );
    let mut prompt = scripted_prompt(&[
        "not an invitation",
        &no_services,
        &did_only,
        SAMPLE_INVITATION,
        "X",
    ]);
    let consumed = holder.run_beed_user(&mut prompt).await?;

    assert_eq!(consumed, vec!["9109c998-f26a-4dbd-8200-33c805e6af03"]);
    let output = output_of(prompt);
    assert_eq!(output.matches("Invalid invitation").count(), 3);
    assert!(output.contains("lists no inline service"));
    assert!(output.contains("handshake https://didcomm.org/didexchange/1.0 via http://172.17.0.1:8020"));
    assert!(output.contains("(4) Input New Invitation / (X) Exit?"));
    Ok(())
}

#[tokio::test]
async fn beed_user_reads_pretty_printed_invitation() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let pretty = serde_json::to_string_pretty(&serde_json::from_str::<serde_json::Value>(
        SAMPLE_INVITATION,
    )?)?;
    info!("Pasting invitation over {} lines", pretty.lines().count());
    let mut script: Vec<&str> = pretty.lines().collect();
    script.push("X");

    let holder = agent(&ledger.url(), state_dir.path(), Role::BeedUser);
    let mut prompt = scripted_prompt(&script);
    let consumed = holder.run_beed_user(&mut prompt).await?;

    assert_eq!(consumed, vec!["9109c998-f26a-4dbd-8200-33c805e6af03"]);
    let output = output_of(prompt);
    assert!(!output.contains("Invalid invitation"));
    assert_eq!(output.matches("Invite details: ").count(), 1);
    Ok(())
}

#[tokio::test]
async fn beed_user_consumes_invitation_once() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let holder = agent(&ledger.url(), state_dir.path(), Role::BeedUser);
    let mut prompt = scripted_prompt(&[SAMPLE_INVITATION, "4", SAMPLE_INVITATION]);
    let consumed = holder.run_beed_user(&mut prompt).await?;

    assert_eq!(consumed.len(), 1);
    let output = output_of(prompt);
    assert!(output.contains("already been consumed"));
    Ok(())
}

#[tokio::test]
async fn boe_invitation_url_is_accepted_by_beed_user() -> Result<()> {
    LOGGING_INIT.call_once(setup_env_logging);
    let mut ledger = Server::new_async().await;
    mock_genesis(&mut ledger, GENESIS).await;
    let state_dir = TempDir::new()?;

    let boe = agent(&ledger.url(), state_dir.path(), Role::Boe { revocation: false });
    let mut boe_prompt = scripted_prompt(&["X"]);
    let created = boe.run_boe(false, &mut boe_prompt).await?;
    let output = output_of(boe_prompt);
    let url = output
        .lines()
        .find_map(|line| line.strip_prefix("Invitation URL: "))
        .expect("invitation URL printed");
    info!("Passing {url} to beed_user");

    let holder = agent(&ledger.url(), state_dir.path(), Role::BeedUser);
    let consumed = holder
        .run_beed_user(&mut scripted_prompt(&[url, "X"]))
        .await?;

    assert_eq!(consumed, created);
    Ok(())
}
