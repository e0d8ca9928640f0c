//! JSON envelope and XML payload translation.
//!
//! Request envelope: `{"customer_request":{"customer":{"cunbr":"<id>"}}}`
//! Response envelope: `{"customer_response":{"customer":{"cunbr":"<id>","accounts":[...]}}}`
//! Remote payload: `<customer><accounts><account>..</account></accounts></customer>`,
//! where only the `accounts` name is significant.

use crate::domain::model::LookupRequest;
use crate::utils::error::{BridgeError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::Serialize;
use serde_json::Value;

const ACCOUNTS_TAG: &[u8] = b"accounts";

// root = 1, <accounts> = 2, 單一帳號元素 = 3
const ACCOUNTS_DEPTH: usize = 2;
const ACCOUNT_DEPTH: usize = 3;

#[derive(Serialize)]
struct RequestEnvelope<'a> {
    customer_request: RequestCustomer<'a>,
}

#[derive(Serialize)]
struct RequestCustomer<'a> {
    customer: RequestBody<'a>,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    cunbr: &'a str,
}

#[derive(Serialize)]
struct ResponseEnvelope<'a> {
    customer_response: ResponseCustomer<'a>,
}

#[derive(Serialize)]
struct ResponseCustomer<'a> {
    customer: ResponseBody<'a>,
}

#[derive(Serialize)]
struct ResponseBody<'a> {
    cunbr: &'a str,
    accounts: &'a [String],
}

fn malformed_request(reason: impl Into<String>) -> BridgeError {
    BridgeError::MalformedRequest {
        reason: reason.into(),
    }
}

fn malformed_xml(reason: impl Into<String>) -> BridgeError {
    BridgeError::MalformedXml {
        reason: reason.into(),
    }
}

/// 從 request envelope 取出 cunbr，原樣保留，不做任何格式檢查
pub fn decode_request(raw_json: &str) -> Result<LookupRequest> {
    let value: Value = serde_json::from_str(raw_json)
        .map_err(|e| malformed_request(format!("invalid JSON: {}", e)))?;

    let customer_request = value
        .get("customer_request")
        .filter(|v| v.is_object())
        .ok_or_else(|| malformed_request("missing `customer_request` object"))?;

    let customer = customer_request
        .get("customer")
        .filter(|v| v.is_object())
        .ok_or_else(|| malformed_request("missing `customer_request.customer` object"))?;

    let cunbr = customer
        .get("cunbr")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed_request("missing `customer_request.customer.cunbr` string"))?;

    Ok(LookupRequest::new(cunbr))
}

pub fn encode_request(request: &LookupRequest) -> Result<String> {
    let envelope = RequestEnvelope {
        customer_request: RequestCustomer {
            customer: RequestBody {
                cunbr: request.customer_id(),
            },
        },
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn encode_response(customer_id: &str, accounts: &[String]) -> Result<String> {
    let envelope = ResponseEnvelope {
        customer_response: ResponseCustomer {
            customer: ResponseBody {
                cunbr: customer_id,
                accounts,
            },
        },
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// 解析遠端 XML，依文件順序回傳 root 底下每個 `accounts` 子元素內的帳號。
///
/// 沒有 `accounts` 時回傳空陣列；空字串或不合法的 XML 一律是 `MalformedXml`。
pub fn decode_xml_accounts(raw_xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(raw_xml);

    let mut accounts = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut in_accounts = false;
    let mut current: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed_xml(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed_xml("more than one root element"));
                    }
                    seen_root = true;
                }
                depth += 1;

                if depth == ACCOUNTS_DEPTH {
                    in_accounts = e.local_name().as_ref() == ACCOUNTS_TAG;
                } else if depth == ACCOUNT_DEPTH && in_accounts {
                    current = Some(String::new());
                }
            }
            Event::Empty(_) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed_xml("more than one root element"));
                    }
                    seen_root = true;
                } else if depth == ACCOUNTS_DEPTH && in_accounts {
                    // <account/> 沒有文字內容
                    accounts.push(String::new());
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(malformed_xml("unexpected closing tag"));
                }
                if depth == ACCOUNT_DEPTH && in_accounts {
                    if let Some(text) = current.take() {
                        accounts.push(text);
                    }
                } else if depth == ACCOUNTS_DEPTH {
                    in_accounts = false;
                }
                depth -= 1;
            }
            Event::Text(t) => {
                if depth == 0 {
                    if !t.iter().all(u8::is_ascii_whitespace) {
                        return Err(malformed_xml("text outside of the root element"));
                    }
                } else if depth == ACCOUNT_DEPTH {
                    if let Some(buf) = current.as_mut() {
                        let text = t.unescape().map_err(|e| malformed_xml(e.to_string()))?;
                        buf.push_str(&text);
                    }
                }
            }
            Event::CData(c) => {
                if depth == 0 {
                    return Err(malformed_xml("CDATA outside of the root element"));
                }
                if depth == ACCOUNT_DEPTH {
                    if let Some(buf) = current.as_mut() {
                        let text = std::str::from_utf8(&c)
                            .map_err(|e| malformed_xml(e.to_string()))?;
                        buf.push_str(text);
                    }
                }
            }
            Event::Eof => break,
            // 宣告、註解、PI、DOCTYPE 都不影響結果
            _ => {}
        }
    }

    if depth != 0 {
        return Err(malformed_xml("unexpected end of document, unclosed element"));
    }
    if !seen_root {
        return Err(malformed_xml("document has no root element"));
    }

    Ok(accounts)
}

/// 以遠端服務的格式輸出帳號清單，供測試與假資料使用
pub fn encode_xml_accounts(accounts: &[String]) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Start(BytesStart::new("customer")))
        .map_err(xml_write)?;
    writer
        .write_event(Event::Start(BytesStart::new("accounts")))
        .map_err(xml_write)?;

    for account in accounts {
        writer
            .write_event(Event::Start(BytesStart::new("account")))
            .map_err(xml_write)?;
        writer
            .write_event(Event::Text(BytesText::new(account)))
            .map_err(xml_write)?;
        writer
            .write_event(Event::End(BytesEnd::new("account")))
            .map_err(xml_write)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("accounts")))
        .map_err(xml_write)?;
    writer
        .write_event(Event::End(BytesEnd::new("customer")))
        .map_err(xml_write)?;

    String::from_utf8(writer.into_inner()).map_err(|e| BridgeError::ProcessingError {
        message: format!("generated XML is not UTF-8: {}", e),
    })
}

fn xml_write<E: std::fmt::Display>(e: E) -> BridgeError {
    BridgeError::ProcessingError {
        message: format!("XML write failed: {}", e),
    }
}
