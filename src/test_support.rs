// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fixed RSA-2048 key pairs and a signing helper for tests.

use base64::{engine::general_purpose::STANDARD, Engine};
use ring::rand::SystemRandom;
use ring::signature::{RsaKeyPair, RSA_PKCS1_SHA256};

/// Alice's private key (base64 PKCS#8 DER).
pub const ALICE_PKCS8: &str = "MIIEvAIBADANBgkqhkiG9w0BAQEFAASCBKYwggSiAgEAAoIBAQDAc1LcKBQloAaPPp/XFbCv28bfN9Da28r1T3sSltmy4N220z1HIQh3pDkvGSapkzghxnMC+X6SmS5AgVzJhvS4yYUjjslL7G3ev9f+MQ4aMommQpzILxOEa2YlwxgpIbBiaStFHbcNXNNMjMVID0+1wDBFP3w33VKMU/60dykGbbY9gLEDvQ6NkFUoFgTMcOC4HFmxNMpqxXkAFsJm1UIjwvs5ay9QV7JUjXS5ghonw7WfiDdnG0E2b+LLzvoy4JdPlzMZeA0SMn4QW7bl6wKpTwH0bSSL3FEDC1KpqYTvXiJci7yPZcwVzXPv0fx2T0ms/PnmK7W54PI7EmeXzShhAgMBAAECggEAAQds0+lb8uKNk8JU4PXIUCcSQ7sc66/9Vb1IeMOOjkQLs3Ci39M8+W91myXyMg8WilRbujztcL5kbqsHvQ/IFbKFes3xOhhyyEbe0l4JR68UU4EA18TWq3XWjJD5O1kR2XOGAXSEosvnrlMEsrCwRKtue/mjAfp140hcsN1/6Of2ul6yQIGMPXBXBN0pLsRH975oF1/grRi5w+aY61KlTIH6oq9G7dgh/ZzYWwYgtugvVMaOd5ch//t2T8whGkWa/IK1y94XXG/FRni7s44jqsQ8pgurvvUDhSw6IFsT5cU9D2HuQJ8b/9tD1VXp0U/NvjT53gnQ3SU7fXS2cWfB0QKBgQDj/ouuk9HcUwdgaIgQ2PImJ9KTqoXBkJMTg82kEQA5m/wBxmiF3EeqkHgcga4qoF1lBGC08b5qF4DdIO3lcGREIGOYmIVTAWm/NPGOiS2l6m743DPFLwFEM2oTezikbPQh70igumbKNgBEy2nSjJ0rF7JfpaEPPIYkYBxY27ioGQKBgQDYFxM9GW7SSquwOzEjTsfLxkI5IJSTX3lM+vSQ6KCG3aiNNPoOPiOCvyZ5nXLXNmGTLTn2JQzHNT5RB6R09hTiSgcengJT44PbefCTbAPhp4GsOqGhJCteAqYz+tkpbsWwV5h8Sd1fxqXHJZDm9pMXc9SAjN93dS/3qfzEb5criQKBgFnfe1xj9LPvHtdIHWrWug2EYSPIclVtEiz9JdDoyrfq3xosBgPOY4m+zToffHJdKLOrWBu7t53Gigug8WYiOcQJKHl8lgG0auTuj9HqDU577Sa4VsgB0XP6+HOZfSiDsnC2DGEfWWmYg96aeKqAt2vHOY8ukSCacR5hrIryggXxAoGAIPtsqU+/dYOGLxDp0BzPLBAnvXZ2lwPkjNZlC9Ul40/j0SG75P6hBuzMH5XjmGupewBVL3e6OpGq4E1NUbjZuSxZZ9fwPQOl9ZLoIGhFM2UQysvsLZ9Kqz+2RIrOKJ/Ktr63/Ih9rIeyd/II6ufJzbOVRMW7ugz99ExS01zA8xkCgYAXPc1FESMSPfpiaCOy6Hd/T2hLYKMaBn351XxpGKo4kGwvMmkJ/wwShW8ur5nYCka+lopiFT5sUbZHY8LMI1mGBMDXQaPJYA/2oyqM2DsHLrwkchufusvEpWUFrGz/rpu/iZBYq7MENGaXz2FKT4Apc+BIhhrUlpPda9/VSrZn2Q==";

/// Alice's public key (base64 DER SubjectPublicKeyInfo).
pub const ALICE_PUBLIC_KEY: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAwHNS3CgUJaAGjz6f1xWwr9vG3zfQ2tvK9U97EpbZsuDdttM9RyEId6Q5LxkmqZM4IcZzAvl+kpkuQIFcyYb0uMmFI47JS+xt3r/X/jEOGjKJpkKcyC8ThGtmJcMYKSGwYmkrRR23DVzTTIzFSA9PtcAwRT98N91SjFP+tHcpBm22PYCxA70OjZBVKBYEzHDguBxZsTTKasV5ABbCZtVCI8L7OWsvUFeyVI10uYIaJ8O1n4g3ZxtBNm/iy876MuCXT5czGXgNEjJ+EFu25esCqU8B9G0ki9xRAwtSqamE714iXIu8j2XMFc1z79H8dk9JrPz55iu1ueDyOxJnl80oYQIDAQAB";

pub const BOB_PKCS8: &str = "MIIEvQIBADANBgkqhkiG9w0BAQEFAASCBKcwggSjAgEAAoIBAQDrS4euBc3ek+EKVhjN5gJPb5z+KHJLyvrNTV2ftEe0QNaksxLmvEtimpt7dZ59jblJbVmS6XfRwldXThVtJbU5tk7Ts1kuxKNTytpPGXMgqEB7U1m/21G5LHG/aRrkzwsXv2KtEiYNuExMu/E2J4CWnCBR5Q1+PSWcdHW2lTWtx7dlSLMJecJ1lzu+77rut2R9zWh9JAlxMji+LAWKWnlCPKSsiW+OmeyrNn1Zb0eTywXnfAicN5cgekUJUP1QzLFvsEkjduif70tEoc1n8tGWqkCfXFlr/x7WyHWtpLemoCw1riXssRJ7ch9jW7Q+dwGlJVDRlTQMiuSQAXQLWcynAgMBAAECggEAQDIYwA18WBw/m1rXJKH7AmJA0oUFfhFQsR/JCfAdWhwQk9n5r7My3CGzhxEVn0rCATsQ48jH9JZRzxOSO/e8RJUtV4wIqn5i01M2kbsvUnslMKCSjYpQdzWdiSwrdr7YV2/Tg8W+VSLxykPCsVRAvJa3KLDWKBmVv+R0U07NWO5s8s/j5Tg9mBHN9VLlc05yXfQ4582OPygsfK5jl1zymgog5M2HlvkcWqTJ/7yQR78go0wqGYZlRo6mRajLWRTmW7WGOxdpx4ITGZtZ41gJUlMsh8dunJJ/InXRvSlfGcdDpIbfILisUGX/7gzXbPr2QfaNGTfBlQU2bM4dlMlhkQKBgQD6i9DId8YQhLeVprYwlR1ecN6QyZMdZcMF6p43vzH3QcMwHrFpHVvWIEl2m04ODGj1w+dwayRoQnfHk21p2bJwaODCvyuiL+ShEhGw0fkDNYcRX2DC4EZ0cvMrZ2z3i5HVktlgjQ8SWqeRlK/Q9ZpwZk+78RLIb80J4a4qniq31wKBgQDwaroEI2Kpd8ITegyzs9ogciIi37ib25R8Xn9nahCptC56CAr5hzPNtteR4n6otIbYhHfgIh7gQHL/Zk+SNQSDm4adeDUSJvCTxFPqLdjsl0OSgyNy7KIn5yi09bBOJSxQEUKTOdo1qMst36tYGDo4bBKM/6bPgdBTBHNHyAq3sQKBgDjPMwwBfHuKXEYmgvEJHpunZA/YZO8pf8r7o9xoEeBKnQNwMjHvYj9vGrk2BcDRt4riXLv0z1CEobwzBYAWyIsMfMorpq0jxuduvWwmcBv2KyYZRktppxAIcHLLBL4se2i932QxF9XFkHFGEYeD6PzLdhDbXLLuBsPS1Db9nhoJAoGBALDvWwdAo5PlN0fuQvreGmJWnRjdXZgW+iitw0XwoWLD4JCe6rTJ9C4pqm0LK/wtIDCpDTA+7EpOJFQij90id7gD9gZeOXCqh9O4YamvJD669FgXezdRP+XuEd9cEezxHrOugDiqExX6q82PFyM2cWKk5uIuJC4Dc7YlSFJDvt+BAoGAHlQ11vXRgG9w+kzO+WFXFh2mciqoftUYJkYguZN+++Yky0IlilBSOKmVdiRYM7hIJ0oMEej8yvg3kT1PAgJ0MQu4HewRpfRSpfFk67XENgx9bWpdZtsPGznAjeveyUnS5G/MCeH0gxAw1VJfmCj+7mOiyRrE2IsTI0yHS1ujaWU=";

pub const BOB_PUBLIC_KEY: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA60uHrgXN3pPhClYYzeYCT2+c/ihyS8r6zU1dn7RHtEDWpLMS5rxLYpqbe3WefY25SW1Zkul30cJXV04VbSW1ObZO07NZLsSjU8raTxlzIKhAe1NZv9tRuSxxv2ka5M8LF79irRImDbhMTLvxNieAlpwgUeUNfj0lnHR1tpU1rce3ZUizCXnCdZc7vu+67rdkfc1ofSQJcTI4viwFilp5QjykrIlvjpnsqzZ9WW9Hk8sF53wInDeXIHpFCVD9UMyxb7BJI3bon+9LRKHNZ/LRlqpAn1xZa/8e1sh1raS3pqAsNa4l7LESe3IfY1u0PncBpSVQ0ZU0DIrkkAF0C1nMpwIDAQAB";

/// Sign `message` with RSASSA-PKCS1-v1_5 / SHA-256, returning base64.
pub fn sign(pkcs8_b64: &str, message: &str) -> String {
    let der = STANDARD.decode(pkcs8_b64).expect("fixture key is base64");
    let key_pair = RsaKeyPair::from_pkcs8(&der).expect("fixture key is PKCS#8 RSA");
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(&RSA_PKCS1_SHA256, &SystemRandom::new(), message.as_bytes(), &mut signature)
        .expect("signing succeeds");
    STANDARD.encode(signature)
}
