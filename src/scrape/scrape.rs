// src/scrape/scrape.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use chrono::NaiveDateTime;
use tracing::{ info, warn };

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    error::FetchError,
    progress::{ NullProgress, Progress },
    specs::{ flyers::{ self, FlyerRecord }, shops::{ self, ShopLink }},
};

/// What a worker reports back to the aggregating thread.
enum WorkerMsg {
    Started(usize),
    Finished(usize, Result<Vec<FlyerRecord>, FetchError>),
}

/// Directory → every shop → flat list of current flyers.
///
/// Never fails: an unreachable directory means no shops, an unreachable shop
/// means no flyers from it. Output order is directory order, then page order,
/// whatever `workers` is set to.
pub fn collect_flyers(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    now: NaiveDateTime,
    progress: Option<&mut dyn Progress>,
) -> Vec<FlyerRecord> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let shops = list_shops(fetcher, scrape, &mut *progress);
    progress.begin(shops.len());

    let per_shop = if scrape.workers > 1 && shops.len() > 1 {
        collect_parallel(fetcher, scrape, &shops, now, &mut *progress)
    } else {
        collect_sequential(fetcher, scrape, &shops, now, &mut *progress)
    };

    progress.finish();

    let flyers: Vec<FlyerRecord> = per_shop.into_iter().flatten().collect();
    info!(shops = shops.len(), flyers = flyers.len(), "scrape finished");
    flyers
}

/// Shop list from the directory page, or nothing if it can't be fetched.
pub fn list_shops(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Vec<ShopLink> {
    match shops::fetch_shops(fetcher, &scrape.directory_url, &scrape.origin) {
        Ok(shops) => {
            info!(url = %scrape.directory_url, shops = shops.len(), "read shop directory");
            shops
        }
        Err(e) => {
            warn!("{e}");
            progress.log(&format!("Error fetching URL '{}': {e}", e.url()));
            Vec::new()
        }
    }
}

fn collect_sequential(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    shops: &[ShopLink],
    now: NaiveDateTime,
    progress: &mut dyn Progress,
) -> Vec<Vec<FlyerRecord>> {
    let mut per_shop = Vec::with_capacity(shops.len());

    for (i, shop) in shops.iter().enumerate() {
        progress.item_started(i, &shop.name, &shop.url);
        let result = flyers::fetch_flyers(fetcher, &shop.url, &shop.name, now);
        per_shop.push(settle(i, shop, result, &mut *progress));
        pause(scrape);
    }

    per_shop
}

/// Worker pool over the shop list. Results arrive in any order and are put
/// back into directory order before returning.
fn collect_parallel(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    shops: &[ShopLink],
    now: NaiveDateTime,
    progress: &mut dyn Progress,
) -> Vec<Vec<FlyerRecord>> {
    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<WorkerMsg>();
    let workers = scrape.workers.min(shops.len()).max(1);

    let mut per_shop: Vec<(usize, Vec<FlyerRecord>)> = Vec::with_capacity(shops.len());

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let idx = &counter;

            s.spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some(shop) = shops.get(i) else { break };

                    if tx.send(WorkerMsg::Started(i)).is_err() {
                        break;
                    }
                    let result = flyers::fetch_flyers(fetcher, &shop.url, &shop.name, now);
                    if tx.send(WorkerMsg::Finished(i, result)).is_err() {
                        break;
                    }
                    pause(scrape);
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        for msg in res_rx.iter() {
            match msg {
                WorkerMsg::Started(i) => {
                    let shop = &shops[i];
                    progress.item_started(i, &shop.name, &shop.url);
                }
                WorkerMsg::Finished(i, result) => {
                    let records = settle(i, &shops[i], result, &mut *progress);
                    per_shop.push((i, records));
                }
            }
        }
    });

    // Back to directory order
    per_shop.sort_by_key(|(i, _)| *i);
    per_shop.into_iter().map(|(_, records)| records).collect()
}

/// Log one shop's outcome; a failed fetch contributes nothing.
fn settle(
    index: usize,
    shop: &ShopLink,
    result: Result<Vec<FlyerRecord>, FetchError>,
    progress: &mut dyn Progress,
) -> Vec<FlyerRecord> {
    match result {
        Ok(records) => {
            info!(shop = %shop.name, flyers = records.len(), "shop done");
            progress.item_done(index, &shop.name, records.len());
            records
        }
        Err(e) => {
            warn!(shop = %shop.name, "{e}");
            progress.item_failed(index, &shop.name);
            Vec::new()
        }
    }
}

fn pause(scrape: &ScrapeOptions) {
    if !scrape.pause.is_zero() {
        thread::sleep(scrape.pause); // be polite
    }
}
