use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let mut agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(30)))
        .timeout_connect(Some(NET_CONNECT_TIMEOUT))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    if let Some(proxy_url) = proxy_url {
        let proxy = ureq::Proxy::new(proxy_url).ok();
        if proxy.is_none() {
            log::error!("ignoring invalid proxy URL: {proxy_url}");
        }
        agent = agent.proxy(proxy);
    }

    agent
}

/// Value of an `Authorization` header for HTTP Basic authentication.
pub fn basic_authorization(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
