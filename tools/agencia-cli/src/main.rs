//! Agencia Command Line Tool
//!
//! Demonstration client for the agency antifraud registry API:
//! - demo: register sample agencies and walk through the full flow
//! - register: register a single agency
//! - verify: fetch the verification page for an identifier
//! - qr: download the QR verification code to a file
//! - list: list all registered agencies

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use agencia_core::RegistrationForm;
use agencia_http::AgenciaClient;

#[derive(Parser)]
#[command(name = "agencia")]
#[command(version)]
#[command(about = "Client for the agency antifraud registry - register, verify and list agencies")]
#[command(long_about = None)]
struct Cli {
    /// Base URL of the registry server
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register sample agencies and exercise the whole API
    #[command(about = "Register sample agencies and exercise the whole API")]
    Demo,

    /// Register a single agency
    #[command(about = "Register a single agency")]
    Register {
        #[arg(long)]
        nombre: String,

        #[arg(long)]
        nit: String,

        #[arg(long)]
        rnt: String,
    },

    /// Check the verification page for an agency id
    #[command(about = "Check the verification page for an agency id")]
    Verify {
        /// Agency identifier
        #[arg(value_name = "ID")]
        id: Uuid,
    },

    /// Download the QR verification code
    #[command(about = "Download the QR verification code as PNG")]
    Qr {
        /// Agency identifier
        #[arg(value_name = "ID")]
        id: Uuid,

        /// Output file
        #[arg(long, short, default_value = "qr.png")]
        out: std::path::PathBuf,
    },

    /// List all registered agencies
    #[command(about = "List all registered agencies")]
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = AgenciaClient::new(cli.base_url.clone());

    match cli.command {
        Commands::Demo => handle_demo(&client).await,
        Commands::Register { nombre, nit, rnt } => {
            handle_register(&client, RegistrationForm::new(nombre, nit, rnt)).await
        }
        Commands::Verify { id } => handle_verify(&client, id).await,
        Commands::Qr { id, out } => handle_qr(&client, id, &out).await,
        Commands::List => handle_list(&client).await,
    }
}

async fn handle_demo(client: &AgenciaClient) -> Result<()> {
    let samples = [
        ("Aventuras Colombia Ltda", "900123456-1", "RNT-12345"),
        ("Turismo del Café S.A.S", "800987654-2", "RNT-67890"),
        ("Expediciones Amazónicas", "700555444-3", "RNT-11111"),
    ];

    println!("Registrando agencias de ejemplo...");
    let mut registered = Vec::new();
    for (nombre, nit, rnt) in samples {
        let form = RegistrationForm::new(nombre, nit, rnt);
        match client.register(&form).await {
            Ok(agency) => {
                println!("  {} -> id {}", nombre, agency.id);
                println!("    certificado: {}...", &agency.certificate[..20]);
                println!("    verificación: {}", agency.verification_url);
                registered.push(agency);
            }
            Err(err) => println!("  {nombre} -> error: {err}"),
        }
    }

    let Some(first) = registered.first() else {
        bail!("No agencies could be registered; is the server running at {}?", client.base_url());
    };

    handle_verify(client, first.id).await?;

    let out = std::path::PathBuf::from(format!("{}.png", first.id));
    handle_qr(client, first.id, &out).await?;

    handle_list(client).await
}

async fn handle_register(client: &AgenciaClient, form: RegistrationForm) -> Result<()> {
    let agency = client
        .register(&form)
        .await
        .with_context(|| "Registration failed")?;

    println!("Agencia registrada");
    println!("  id:           {}", agency.id);
    println!("  nombre:       {}", agency.name);
    println!("  nit:          {}", agency.nit);
    println!("  rnt:          {}", agency.rnt);
    println!("  certificado:  {}", agency.certificate);
    println!("  verificación: {}", agency.verification_url);
    Ok(())
}

async fn handle_verify(client: &AgenciaClient, id: Uuid) -> Result<()> {
    let page = client
        .verify(id)
        .await
        .with_context(|| format!("Verification request for {id} failed"))?;

    if page.verified {
        println!("Agencia {id} verificada");
    } else {
        println!("ATENCIÓN: agencia {id} NO verificada - posible fraude");
    }
    Ok(())
}

async fn handle_qr(client: &AgenciaClient, id: Uuid, out: &std::path::Path) -> Result<()> {
    let png = client
        .qr_png(id)
        .await
        .with_context(|| format!("QR download for {id} failed"))?;

    std::fs::write(out, png)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("QR guardado en {}", out.display());
    Ok(())
}

async fn handle_list(client: &AgenciaClient) -> Result<()> {
    let listing = client.list().await.with_context(|| "Listing failed")?;

    println!("Total de agencias: {}", listing.total);
    for agency in listing.agencies {
        println!("  {} | NIT {} | {} | {}", agency.name, agency.nit, agency.rnt, agency.id);
    }
    Ok(())
}
