// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signin_shim::auth::{ACCESS_TOKEN_TTL, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use signin_shim::{LoginInterceptor, Request, RoleFlags, SeededRandom, TokenIssuer};

fn token_issue_benchmark(c: &mut Criterion) {
    let issuer = TokenIssuer::new(Arc::new(SeededRandom::new(1)), RoleFlags::default());

    c.bench_function("issue_access_token", |b| {
        b.iter(|| {
            black_box(
                issuer
                    .issue(black_box(DEFAULT_USERNAME), 1_700_000_000, ACCESS_TOKEN_TTL)
                    .unwrap(),
            )
        })
    });
}

fn sign_in_benchmark(c: &mut Criterion) {
    let interceptor = LoginInterceptor::new().with_random(Arc::new(SeededRandom::new(2)));
    let accepted = Request::post("https://app.local/api/sign-in")
        .unwrap()
        .json(&serde_json::json!({ "username": DEFAULT_USERNAME, "password": DEFAULT_PASSWORD }))
        .unwrap();
    let rejected = Request::post("https://app.local/api/sign-in")
        .unwrap()
        .json(&serde_json::json!({ "username": "someone", "password": "wrong" }))
        .unwrap();

    c.bench_function("sign_in_accepted", |b| {
        b.iter(|| black_box(interceptor.respond(black_box(&accepted)).unwrap()))
    });

    c.bench_function("sign_in_rejected", |b| {
        b.iter(|| black_box(interceptor.respond(black_box(&rejected)).unwrap()))
    });
}

criterion_group!(benches, token_issue_benchmark, sign_in_benchmark);
criterion_main!(benches);
