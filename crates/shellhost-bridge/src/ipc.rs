//! Wire protocol between page content and the host.
//!
//! - **JS -> Rust**: a stub function on `window.shellhost` posts
//!   `{"doc", "id", "command", "args"}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: the host evaluates
//!   `window.__shellhostBridge.settle(doc, id, envelope)`, which resolves or
//!   rejects the pending promise for `id`.
//!
//! `doc` is a random token minted once per document. Request ids restart
//! at 1 in every document, so a reply that outlives a navigation carries
//! the old token and is dropped instead of settling a new document's call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::CommandEnvelope;

/// A command invocation posted by page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Token of the document that sent the request.
    pub doc: String,
    pub id: u64,
    pub command: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl BridgeRequest {
    /// Parse a raw IPC body. `None` for anything that is not a well-formed
    /// request.
    pub fn from_json(raw: &str) -> Option<Self> {
        let request: Self = serde_json::from_str(raw).ok()?;
        if request.command.is_empty() || request.doc.is_empty() {
            return None;
        }
        Some(request)
    }
}

/// Injected into every surface before page scripts run.
///
/// Each stub resolves with `reply`, or with the whole envelope when a
/// successful call carried no reply; failures reject with
/// `Failed to execute <command>: <message>`.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__shellhostBridge) { return; }
    var pending = new Map();
    var nextId = 1;
    var doc = (function() {
        var words = new Uint32Array(4);
        window.crypto.getRandomValues(words);
        return Array.prototype.map.call(words, function(w) {
            return ('00000000' + w.toString(16)).slice(-8);
        }).join('');
    })();

    function invoke(command, args) {
        return new Promise(function(resolve, reject) {
            var id = nextId++;
            pending.set(id, { command: command, resolve: resolve, reject: reject });
            window.ipc.postMessage(JSON.stringify({ doc: doc, id: id, command: command, args: args }));
        });
    }

    function settle(replyDoc, id, envelope) {
        if (replyDoc !== doc) { return; }
        var call = pending.get(id);
        if (!call) { return; }
        pending.delete(id);
        if (envelope && envelope.success) {
            var reply = envelope.reply;
            call.resolve(reply === undefined || reply === null ? envelope : reply);
        } else {
            var message = (envelope && envelope.message) || 'An unknown error occurred';
            call.reject(new Error('Failed to execute ' + call.command + ': ' + message));
        }
    }

    Object.defineProperty(window, '__shellhostBridge', {
        value: Object.freeze({ settle: settle }),
        writable: false,
        configurable: false
    });

    Object.defineProperty(window, 'shellhost', {
        value: Object.freeze({
            closeApp: function() { return invoke('close-app', []); },
            toggleFullscreen: function() { return invoke('toggle-fullscreen', []); },
            resize: function(width, height) { return invoke('resize', [width, height]); },
            takeScreenshot: function(filename) {
                return invoke('take-screenshot', filename === undefined ? [] : [filename]);
            },
            openWindow: function(url, width, height, x, y) {
                return invoke('open-window', [url, width, height, x, y].map(function(v) {
                    return v === undefined ? null : v;
                }));
            },
            closeWindow: function(handle) { return invoke('close-window', [handle]); }
        }),
        writable: false,
        configurable: false
    });
})();
"#;

/// Script that installs the content security policy as the first child
/// of `<head>`. A policy `<meta>` anywhere else is ignored, so when the
/// head does not exist yet at document start, wait for the parser to
/// create it.
pub fn csp_init_script(policy: &str) -> String {
    let policy = serde_json::to_string(policy).unwrap_or_else(|_| "\"default-src 'self'\"".into());
    format!(
        r#"(function() {{
    function install(head) {{
        var meta = document.createElement('meta');
        meta.httpEquiv = 'Content-Security-Policy';
        meta.content = {policy};
        head.insertBefore(meta, head.firstChild);
    }}
    if (document.head) {{ install(document.head); return; }}
    var observer = new MutationObserver(function() {{
        if (!document.head) {{ return; }}
        observer.disconnect();
        install(document.head);
    }});
    observer.observe(document, {{ childList: true, subtree: true }});
}})();"#
    )
}

/// Script delivering `envelope` to the pending call `id` of document `doc`.
pub fn settle_script(doc: &str, id: u64, envelope: &CommandEnvelope) -> String {
    let doc = serde_json::to_string(doc).unwrap_or_else(|_| "\"\"".into());
    let envelope = serde_json::to_string(envelope)
        .unwrap_or_else(|_| r#"{"success":false,"message":"An unknown error occurred"}"#.into());
    format!("window.__shellhostBridge && window.__shellhostBridge.settle({doc}, {id}, {envelope});")
}
