//! Sample tree shown on a fresh dashboard.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use bault_core::types::ItemId;
use bault_entity::{CreateItem, Item};
use bault_store::{ItemStore, StoreResult};

const CONFIG_JSON: &str = r#"{
  "appName": "Bault",
  "version": "1.0.0",
  "features": {
    "preview": true,
    "darkMode": true,
    "autoSave": false
  },
  "theme": "dark",
  "port": 3000,
  "database": {
    "host": "localhost",
    "port": 5432,
    "name": "bault_db"
  }
}"#;

const REPORT: &str = "This is a sample report document. \n\nSection 1: Introduction...";

const COMPONENT_TSX: &str = r#"import React, { useState } from 'react'

interface Props {
  title: string
  onSave: (count: number) => void
}

export function Counter({ title, onSave }: Props) {
  const [count, setCount] = useState(0)

  return (
    <div className="card">
      <h2>{title}</h2>
      <p>Count: {count}</p>
      <button onClick={() => setCount(count + 1)}>Increment</button>
      <button onClick={() => onSave(count)}>Save</button>
    </div>
  )
}"#;

const UTILS_PY: &str = r#"#!/usr/bin/env python3
"""Utility functions for data processing."""

import json
import logging

logger = logging.getLogger(__name__)


def load_config(path: str = "config.json") -> dict:
    try:
        with open(path) as f:
            return json.load(f)
    except FileNotFoundError:
        logger.warning("config file %s not found", path)
        return {}
"#;

const STYLES_CSS: &str = r#":root {
  --primary-color: #3b82f6;
  --background-color: #ffffff;
  --text-color: #1f2937;
  --border-radius: 0.5rem;
}

@media (prefers-color-scheme: dark) {
  :root {
    --background-color: #1f2937;
    --text-color: #f9fafb;
  }
}

.card {
  border-radius: var(--border-radius);
  color: var(--text-color);
}
"#;

/// Sample items with timestamps relative to `now`, parents before children.
pub fn sample_items(now: DateTime<Utc>) -> Vec<Item> {
    let documents = ItemId::new();
    let pictures = ItemId::new();
    let code = ItemId::new();

    let item = |id: ItemId, request: CreateItem| request.into_item(id, now);

    vec![
        item(documents, CreateItem::folder("Documents", None)),
        item(pictures, CreateItem::folder("Pictures", None)),
        item(code, CreateItem::folder("Code", None)),
        item(
            ItemId::new(),
            CreateItem::file("config.json", None, 1024).with_content(CONFIG_JSON),
        ),
        item(ItemId::new(), CreateItem::folder("My Notes", Some(documents))),
        item(
            ItemId::new(),
            CreateItem::file("report.docx", Some(documents), 204_800)
                .with_content(REPORT)
                .modified_at(now - Duration::days(1)),
        ),
        item(
            ItemId::new(),
            CreateItem::file("image.png", Some(pictures), 1_024_000)
                .modified_at(now - Duration::days(2)),
        ),
        item(
            ItemId::new(),
            CreateItem::file("component.tsx", Some(code), 2048)
                .with_content(COMPONENT_TSX)
                .modified_at(now - Duration::hours(1)),
        ),
        item(
            ItemId::new(),
            CreateItem::file("utils.py", Some(code), 1536)
                .with_content(UTILS_PY)
                .modified_at(now - Duration::hours(2)),
        ),
        item(
            ItemId::new(),
            CreateItem::file("styles.css", Some(code), 1024)
                .with_content(STYLES_CSS)
                .modified_at(now - Duration::hours(3)),
        ),
    ]
}

/// Load the sample tree into `store`.
pub fn seed(store: &mut ItemStore) -> StoreResult<()> {
    let items = sample_items(Utc::now());
    let count = items.len();
    store.insert_batch(items)?;
    info!(count, "Seeded sample data");
    Ok(())
}
