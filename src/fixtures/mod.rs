//! Test fixtures for Slack API responses.
//!
//! Full response envelopes, as the platform returns them.

use serde_json::{json, Value};

/// A usergroup record
pub fn usergroup() -> Value {
    json!({
        "id": "S0614TZR7",
        "team_id": "T060RNRCH",
        "is_usergroup": true,
        "name": "Team Admins",
        "description": "A group of all Administrators on your team.",
        "handle": "admins",
        "is_external": false,
        "date_create": 1446598059,
        "date_update": 1446670362,
        "date_delete": 0,
        "auto_type": "admin",
        "created_by": "USLACKBOT",
        "updated_by": "U060RNRCZ",
        "deleted_by": null,
        "prefs": {"channels": [], "groups": []},
        "user_count": 2
    })
}

/// Envelope of usergroups.create / update / enable / disable
pub fn usergroup_response() -> Value {
    json!({"ok": true, "usergroup": usergroup()})
}

/// Envelope of usergroups.list
pub fn usergroups_list_response() -> Value {
    let mut disabled = usergroup();
    disabled["id"] = json!("S06158AV7");
    disabled["name"] = json!("Marketing");
    disabled["handle"] = json!("marketing");
    disabled["auto_type"] = Value::Null;
    disabled["date_delete"] = json!(1446746793);

    json!({"ok": true, "usergroups": [usergroup(), disabled]})
}

/// Envelope of usergroups.users.list
pub fn usergroup_users_response() -> Value {
    json!({"ok": true, "users": ["U060R4BJ4", "W123A4BC5"]})
}

/// A modal view record
pub fn view() -> Value {
    json!({
        "id": "VMHU10V25",
        "team_id": "T8N4K1JN",
        "type": "modal",
        "title": {"type": "plain_text", "text": "Quite a plain modal"},
        "submit": {"type": "plain_text", "text": "Create"},
        "blocks": [
            {
                "type": "input",
                "block_id": "a_block_id",
                "label": {"type": "plain_text", "text": "A simple label", "emoji": true},
                "optional": false,
                "element": {"type": "plain_text_input", "action_id": "an_initial_action_id"}
            }
        ],
        "private_metadata": "Shh it is a secret",
        "callback_id": "identify_your_modals",
        "state": {"values": {}},
        "hash": "156772938.1827394",
        "clear_on_close": false,
        "notify_on_close": false,
        "root_view_id": "VMHU10V25",
        "previous_view_id": null,
        "app_id": "AA4928AQ",
        "external_id": "",
        "bot_id": "BA13894H"
    })
}

/// Envelope of the views.* methods
pub fn view_response() -> Value {
    json!({"ok": true, "view": view()})
}

/// Envelope of chat.postMessage
pub fn post_message_response() -> Value {
    json!({
        "ok": true,
        "channel": "C123ABC456",
        "ts": "1503435956.000247",
        "message": {
            "text": "Here's a message for you",
            "username": "ecto1",
            "bot_id": "B123ABC456",
            "type": "message",
            "subtype": "bot_message",
            "ts": "1503435956.000247"
        }
    })
}

/// Envelope of chat.getPermalink
pub fn permalink_response() -> Value {
    json!({
        "ok": true,
        "channel": "C123ABC456",
        "permalink": "https://ghostbusters.slack.com/archives/C1H9RESGA/p135854651500008"
    })
}

/// Envelope of chat.postEphemeral
pub fn post_ephemeral_response() -> Value {
    json!({"ok": true, "message_ts": "1502210682.580145"})
}

/// Envelope of chat.scheduleMessage
pub fn schedule_message_response() -> Value {
    json!({
        "ok": true,
        "channel": "C1H9RESGL",
        "scheduled_message_id": "Q1298393284",
        "post_at": 1562180400,
        "message": {
            "text": "Here's a message for you in the future",
            "type": "delayed_message",
            "subtype": "bot_message"
        }
    })
}

/// Envelope of auth.test for a bot token
pub fn auth_test_response() -> Value {
    json!({
        "ok": true,
        "url": "https://subarachnoid.slack.com/",
        "team": "Subarachnoid Workspace",
        "user": "grace",
        "team_id": "T12345678",
        "user_id": "W12345678",
        "bot_id": "B12345678",
        "is_enterprise_install": false
    })
}

/// Failure envelope with a code and detail messages
pub fn error_response(code: &str) -> Value {
    json!({
        "ok": false,
        "error": code,
        "response_metadata": {"messages": [format!("[ERROR] {}", code)]}
    })
}
