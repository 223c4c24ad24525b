//! HTML page rendering
//!
//! Small server-rendered pages: the registration form, the verified-agency
//! page and the fraud-warning page. User-supplied values are escaped before
//! being echoed.

use agencia_core::Agency;

/// Minimal HTML escaping for text interpolated into the pages.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Landing page with the registration form.
pub fn home() -> String {
    r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title>Sistema Antifraude Agencias de Turismo</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        .container { max-width: 800px; margin: 0 auto; }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input[type="text"] { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; }
        button { background: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }
        .result { margin-top: 20px; padding: 20px; background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 4px; display: none; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Sistema Antifraude - Agencias de Turismo</h1>
        <p>Registra tu agencia de turismo y obtén un certificado digital con código QR de verificación.</p>
        <form id="registroForm">
            <div class="form-group">
                <label for="nombre">Nombre de la Agencia:</label>
                <input type="text" id="nombre" name="nombre" required>
            </div>
            <div class="form-group">
                <label for="nit">NIT:</label>
                <input type="text" id="nit" name="nit" required>
            </div>
            <div class="form-group">
                <label for="rnt">RNT (Registro Nacional de Turismo):</label>
                <input type="text" id="rnt" name="rnt" required>
            </div>
            <button type="submit">Registrar Agencia</button>
        </form>
        <div id="resultado" class="result"></div>
    </div>
    <script>
        document.getElementById('registroForm').addEventListener('submit', async (e) => {
            e.preventDefault();
            const formData = new FormData(e.target);
            const data = {
                nombre: formData.get('nombre'),
                nit: formData.get('nit'),
                rnt: formData.get('rnt')
            };
            const resultado = document.getElementById('resultado');
            try {
                const response = await fetch('/registrar_agencia', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(data)
                });
                const result = await response.json();
                if (response.ok) {
                    resultado.innerHTML = `
                        <h3>Agencia registrada exitosamente</h3>
                        <p><strong>ID:</strong> ${result.id}</p>
                        <p><strong>Certificado:</strong> ${result.certificado}</p>
                        <p><img src="/qr/${result.id}" alt="Código QR de verificación"></p>
                        <p><a href="${result.url_verificacion}" target="_blank">Verificar agencia</a></p>`;
                } else {
                    resultado.innerHTML = `<p style="color: red;">Error: ${result.message}</p>`;
                }
            } catch (error) {
                resultado.innerHTML = `<p style="color: red;">Error: ${error.message}</p>`;
            }
            resultado.style.display = 'block';
        });
    </script>
</body>
</html>"#
        .to_string()
}

/// Verification page for a registered agency.
pub fn verified(agency: &Agency) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title>Verificación de Agencia</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .verified {{ max-width: 600px; margin: 0 auto; background: #d4edda; border: 1px solid #c3e6cb; border-radius: 4px; padding: 20px; }}
        .label {{ font-weight: bold; }}
        .certificate {{ font-family: monospace; font-size: 12px; word-break: break-all; }}
    </style>
</head>
<body>
    <div class="verified">
        <h1 style="color: green;">Agencia Verificada</h1>
        <p>Esta agencia está oficialmente registrada y verificada.</p>
        <p><span class="label">Nombre:</span> {name}</p>
        <p><span class="label">NIT:</span> {nit}</p>
        <p><span class="label">RNT:</span> {rnt}</p>
        <p><span class="label">Estado:</span> VERIFIED</p>
        <p><span class="label">Fecha de Registro:</span> {registered_at}</p>
        <p><span class="label">ID de Verificación:</span> {id}</p>
        <p><span class="label">Certificado Digital:</span><br>
           <span class="certificate">{certificate}</span></p>
        <p style="color: green;"><strong>Puedes confiar en esta agencia.</strong></p>
    </div>
</body>
</html>"#,
        name = escape(&agency.name),
        nit = escape(&agency.nit),
        rnt = escape(&agency.rnt),
        registered_at = agency.registered_at.to_rfc3339(),
        id = agency.id,
        certificate = escape(&agency.certificate),
    )
}

/// Fraud-warning page for an identifier that was never issued.
///
/// Deliberately distinct from a generic 404: the relying party must read
/// this as "unverifiable, treat as unverified".
pub fn fraud_warning(searched_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title>Agencia No Encontrada</title>
</head>
<body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
    <h1 style="color: red;">Agencia No Encontrada</h1>
    <p>El ID de agencia proporcionado no existe en nuestros registros.</p>
    <p><strong>ID buscado:</strong> {id}</p>
    <p style="color: red; font-weight: bold;">POSIBLE FRAUDE - Esta agencia no está verificada</p>
    <a href="/">Volver al inicio</a>
</body>
</html>"#,
        id = escape(searched_id),
    )
}
