mod common;

use common::{error_code, execute, execute_ok, seed_nft, setup_test_db, NftSeed};
use sea_orm::ConnectionTrait;
use serde_json::json;

const SIGN_UP: &str = r#"
    mutation SignUp($input: SignUpInput!) {
        signUp(input: $input) {
            id
            username
            isVerify
            wallets { address isPrimary }
        }
    }
"#;

const LINK_WALLET: &str = r#"
    mutation LinkWallet($input: LinkWalletInput!) {
        linkWallet(input: $input) {
            address
            isPrimary
            user { id }
        }
    }
"#;

async fn sign_up(db: &sea_orm::DatabaseConnection, address: &str) -> String {
    let data = execute_ok(
        db,
        SIGN_UP,
        json!({ "input": { "username": "ada", "walletAddress": address } }),
    )
    .await;

    data["signUp"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_sign_up_and_look_up_by_wallet() {
    let db = setup_test_db().await.unwrap();

    let data = execute_ok(
        &db,
        SIGN_UP,
        json!({ "input": { "username": "ada", "avatar_url": "https://img/ada.png", "walletAddress": "0xa11ce" } }),
    )
    .await;

    assert_eq!(data["signUp"]["username"], "ada");
    assert_eq!(data["signUp"]["isVerify"], false);
    assert_eq!(
        data["signUp"]["wallets"],
        json!([{ "address": "0xa11ce", "isPrimary": true }])
    );

    let user_id = data["signUp"]["id"].clone();

    let data = execute_ok(
        &db,
        r#"{
            user(walletAddress: "0xa11ce") { address user { id avatar_url } }
            signIn(walletAddress: "0xa11ce") { isPrimary }
            wallet(address: "0xnobody") { address }
        }"#,
        json!({}),
    )
    .await;

    assert_eq!(data["user"]["user"]["id"], user_id);
    assert_eq!(data["user"]["user"]["avatar_url"], "https://img/ada.png");
    assert_eq!(data["signIn"]["isPrimary"], true);
    assert!(data["wallet"].is_null());
}

#[tokio::test]
async fn test_sign_up_conflict_is_reported_with_code() {
    let db = setup_test_db().await.unwrap();
    sign_up(&db, "0xa11ce").await;

    let response = execute(
        &db,
        SIGN_UP,
        json!({ "input": { "username": "mallory", "walletAddress": "0xa11ce" } }),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("CONFLICT"));

    let data = execute_ok(&db, "{ users { id } wallets { id } }", json!({})).await;
    assert_eq!(data["users"].as_array().unwrap().len(), 1);
    assert_eq!(data["wallets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_link_wallet_through_graphql() {
    let db = setup_test_db().await.unwrap();
    let user_id = sign_up(&db, "0xa11ce").await;

    let data = execute_ok(
        &db,
        LINK_WALLET,
        json!({ "input": { "userId": user_id, "walletAddress": "0xb0b" } }),
    )
    .await;

    assert_eq!(data["linkWallet"]["isPrimary"], false);
    assert_eq!(data["linkWallet"]["user"]["id"], user_id.as_str());

    let data = execute_ok(&db, "{ users { wallets { address isPrimary } } }", json!({})).await;
    assert_eq!(
        data["users"][0]["wallets"],
        json!([
            { "address": "0xa11ce", "isPrimary": true },
            { "address": "0xb0b", "isPrimary": false },
        ])
    );

    let response = execute(
        &db,
        LINK_WALLET,
        json!({ "input": { "userId": "6f1c2a8e-58d6-4f67-9a43-0c1a6f1e5b10", "walletAddress": "0xa11ce" } }),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_update_user_only_changes_supplied_fields() {
    let db = setup_test_db().await.unwrap();
    let user_id = sign_up(&db, "0xa11ce").await;

    let data = execute_ok(
        &db,
        r#"mutation Update($input: UpdateUserInput!) {
            updateUser(input: $input) { username displayName bg_image }
        }"#,
        json!({ "input": { "userId": user_id, "displayName": "Ada L." } }),
    )
    .await;

    assert_eq!(
        data["updateUser"],
        json!({ "username": "ada", "displayName": "Ada L.", "bg_image": null })
    );

    let data = execute_ok(
        &db,
        r#"mutation Badge($input: UpdateUserBadgeInput!) {
            updateUserBadge(input: $input) { isVerify userBadge displayName }
        }"#,
        json!({ "input": { "userId": user_id, "isVerify": true, "userBadge": "gold" } }),
    )
    .await;

    assert_eq!(
        data["updateUserBadge"],
        json!({ "isVerify": true, "userBadge": "gold", "displayName": "Ada L." })
    );
}

#[tokio::test]
async fn test_explicit_null_clears_nullable_fields() {
    let db = setup_test_db().await.unwrap();
    let user_id = sign_up(&db, "0xa11ce").await;

    let update = r#"mutation Update($input: UpdateUserInput!) {
        updateUser(input: $input) { username displayName bg_image }
    }"#;

    execute_ok(
        &db,
        update,
        json!({ "input": { "userId": user_id, "displayName": "Ada L.", "bg_image": "cover.png" } }),
    )
    .await;

    let data = execute_ok(
        &db,
        update,
        json!({ "input": { "userId": user_id, "bg_image": null } }),
    )
    .await;

    assert_eq!(
        data["updateUser"],
        json!({ "username": "ada", "displayName": "Ada L.", "bg_image": null })
    );

    let badge = r#"mutation Badge($input: UpdateUserBadgeInput!) {
        updateUserBadge(input: $input) { isVerify userBadge }
    }"#;

    execute_ok(
        &db,
        badge,
        json!({ "input": { "userId": user_id, "isVerify": true, "userBadge": "gold" } }),
    )
    .await;

    let data = execute_ok(
        &db,
        badge,
        json!({ "input": { "userId": user_id, "userBadge": null } }),
    )
    .await;

    assert_eq!(
        data["updateUserBadge"],
        json!({ "isVerify": true, "userBadge": null })
    );
}

#[tokio::test]
async fn test_put_on_sale_can_clear_the_price() {
    let db = setup_test_db().await.unwrap();
    let nft = seed_nft(&db, NftSeed {
        name: "priced",
        minutes: 3,
        ..NftSeed::default()
    })
    .await;

    let data = execute_ok(
        &db,
        r#"mutation Sale($input: PutOnSaleInput!) {
            putOnSale(input: $input) { price isMarketPlace }
        }"#,
        json!({ "input": {
            "tokenId": nft.token_id,
            "collectionAddress": nft.collection_address,
            "isMarketPlace": false,
            "price": null,
        } }),
    )
    .await;

    assert_eq!(
        data["putOnSale"],
        json!({ "price": null, "isMarketPlace": false })
    );
}

#[tokio::test]
async fn test_filter_nfts_far_past_the_end_is_empty() {
    let db = setup_test_db().await.unwrap();
    seed_nft(&db, NftSeed {
        name: "only",
        minutes: 1,
        ..NftSeed::default()
    })
    .await;

    let data = execute_ok(
        &db,
        r#"query Filter($page: Int!) { filterNfts(page: $page) { id } }"#,
        json!({ "page": 2_000_000_000_000_000_000_u64 }),
    )
    .await;

    assert_eq!(data["filterNfts"], json!([]));
}

#[tokio::test]
async fn test_filter_nfts_store_failure_is_reported_with_code() {
    let db = setup_test_db().await.unwrap();
    db.execute_unprepared("DROP TABLE nfts").await.unwrap();

    let response = execute(
        &db,
        r#"{ filterNfts(team: "lakers") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("STORE_FAILURE"));
}

#[tokio::test]
async fn test_filter_nfts_query() {
    let db = setup_test_db().await.unwrap();

    for minutes in 0..10 {
        seed_nft(&db, NftSeed {
            name: "Lakers moment",
            team: Some("lakers"),
            minutes,
            ..NftSeed::default()
        })
        .await;
    }

    for minutes in 10..15 {
        seed_nft(&db, NftSeed {
            name: "Other",
            team: Some("knicks"),
            minutes,
            ..NftSeed::default()
        })
        .await;
    }

    let query = r#"query Filter($page: Int!) {
        filterNfts(team: "Lakers", network: "", page: $page) { tokenId teams }
    }"#;

    let first = execute_ok(&db, query, json!({ "page": 0 })).await;
    let second = execute_ok(&db, query, json!({ "page": 1 })).await;

    assert_eq!(first["filterNfts"].as_array().unwrap().len(), 8);
    assert_eq!(first["filterNfts"][0]["tokenId"], "9");
    assert_eq!(
        second["filterNfts"],
        json!([
            { "tokenId": "1", "teams": "lakers" },
            { "tokenId": "0", "teams": "lakers" },
        ])
    );

    let response = execute(&db, query, json!({ "page": -1 })).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_nft_lifecycle() {
    let db = setup_test_db().await.unwrap();

    let data = execute_ok(
        &db,
        r#"mutation Create($input: CreateNftInput!) {
            createNft(input: $input) { id isMarketPlace isApproved supply }
        }"#,
        json!({ "input": {
            "name": "Rookie Card",
            "tokenId": "42",
            "collectionAddress": "0xc0ffee",
            "network": "polygon",
            "creatorAddress": "0xcreator",
            "ownerAddress": "0xcreator",
            "supply": 10,
            "lazyMint": "true",
            "lazyMintData": "{\"signature\":\"0x01\"}",
        } }),
    )
    .await;

    let id = data["createNft"]["id"].as_str().unwrap().to_string();
    assert_eq!(data["createNft"]["isMarketPlace"], false);
    assert_eq!(data["createNft"]["isApproved"], false);

    let data = execute_ok(
        &db,
        r#"mutation Sale($input: PutOnSaleInput!) {
            putOnSale(input: $input) { price isMarketPlace nftStatus ownerAddress supply }
        }"#,
        json!({ "input": {
            "tokenId": "42",
            "collectionAddress": "0xc0ffee",
            "isMarketPlace": true,
            "price": 2.5,
            "nftStatus": "listed",
        } }),
    )
    .await;

    assert_eq!(
        data["putOnSale"],
        json!({ "price": 2.5, "isMarketPlace": true, "nftStatus": "listed", "ownerAddress": "0xcreator", "supply": 10 })
    );

    let data = execute_ok(
        &db,
        r#"mutation Minted($input: MintedNftUpdateInput!) {
            mintedNftUpdate(input: $input) { mintedNft availableSupply }
        }"#,
        json!({ "input": { "nftId": id, "mintedNft": 3, "availableSupply": 7 } }),
    )
    .await;

    assert_eq!(
        data["mintedNftUpdate"],
        json!({ "mintedNft": 3, "availableSupply": 7 })
    );

    let data = execute_ok(
        &db,
        r#"mutation Lazy($input: LazyMintUpdateInput!) {
            lazyMintUpdate(input: $input) { tokenId lazyMint lazyMintData price }
        }"#,
        json!({ "input": { "id": id, "lazyMint": "false", "ownerAddress": "0xbuyer" } }),
    )
    .await;

    assert_eq!(
        data["lazyMintUpdate"],
        json!({ "tokenId": "42", "lazyMint": "false", "lazyMintData": "{\"signature\":\"0x01\"}", "price": 2.5 })
    );

    let data = execute_ok(
        &db,
        r#"query Lookups($id: UUID!) {
            getSingleNft(tokenId: "42", collectionAddress: "0xc0ffee", network: "polygon") { id }
            getNFTbyObjectId(nftId: $id) { id }
            getSingleNftById(id: $id) { id }
            getNftsOfOwner(ownerAddress: "0xbuyer") { id }
            getNftsOfUser(creatorAddress: "0xcreator") { id }
            searchNfts(key: "rookie") { id }
        }"#,
        json!({ "id": id }),
    )
    .await;

    for field in [
        "getSingleNft",
        "getNFTbyObjectId",
        "getSingleNftById",
        "getNftsOfOwner",
        "getNftsOfUser",
        "searchNfts",
    ] {
        assert_eq!(data[field], json!([{ "id": id }]), "{field}");
    }

    let data = execute_ok(
        &db,
        r#"mutation Approve($input: UpdateNftApproveInput!) {
            updateNftApprove(input: $input) { isApproved }
        }"#,
        json!({ "input": { "id": id, "isApproved": true } }),
    )
    .await;

    assert_eq!(data["updateNftApprove"]["isApproved"], true);

    let delete = r#"mutation Delete($id: UUID!) { deleteNft(id: $id) { id } }"#;

    let data = execute_ok(&db, delete, json!({ "id": id })).await;
    assert_eq!(data["deleteNft"]["id"], id.as_str());

    let response = execute(&db, delete, json!({ "id": id })).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));

    let data = execute_ok(&db, "{ nfts { id } }", json!({})).await;
    assert_eq!(data["nfts"], json!([]));
}

#[tokio::test]
async fn test_put_on_sale_for_unknown_token_is_not_found() {
    let db = setup_test_db().await.unwrap();

    let response = execute(
        &db,
        r#"mutation Sale($input: PutOnSaleInput!) { putOnSale(input: $input) { id } }"#,
        json!({ "input": { "tokenId": "1", "collectionAddress": "0xnone", "price": 1.0 } }),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_auction_queries() {
    let db = setup_test_db().await.unwrap();

    seed_nft(&db, NftSeed {
        name: "Live auction",
        is_auction: true,
        is_market_place: true,
        minutes: 1,
        ..NftSeed::default()
    })
    .await;
    seed_nft(&db, NftSeed {
        name: "Draft auction",
        is_auction: true,
        minutes: 2,
        ..NftSeed::default()
    })
    .await;

    let data = execute_ok(
        &db,
        "{ auctionNfts { name } auctionFilterNft { name } }",
        json!({}),
    )
    .await;

    assert_eq!(data["auctionNfts"].as_array().unwrap().len(), 2);
    assert_eq!(data["auctionFilterNft"], json!([{ "name": "Live auction" }]));
}

#[tokio::test]
async fn test_collection_crud() {
    let db = setup_test_db().await.unwrap();

    let data = execute_ok(
        &db,
        r#"mutation Create($input: CreateCollectionInput!) {
            createCollection(input: $input) { id name symbol }
        }"#,
        json!({ "input": {
            "name": "Hardwood Classics",
            "symbol": "HWC",
            "collectionAddress": "0xc0ffee",
            "creatorAddress": "0xcreator",
            "network": "polygon",
        } }),
    )
    .await;

    let id = data["createCollection"]["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &db,
        r#"mutation Update($input: UpdateCollectionInput!) {
            updateCollection(input: $input) { name symbol category }
        }"#,
        json!({ "input": { "id": id, "category": "sports" } }),
    )
    .await;

    assert_eq!(
        data["updateCollection"],
        json!({ "name": "Hardwood Classics", "symbol": "HWC", "category": "sports" })
    );

    let data = execute_ok(
        &db,
        r#"query Lookups($id: UUID!) {
            collection(id: $id) { id }
            collections { id }
            getCollectionsOfUser(creatorAddress: "0xcreator") { id }
            getCollectionByAddress(collectionAddress: "0xc0ffee", network: "polygon") { id }
            missing: getCollectionByAddress(collectionAddress: "0xc0ffee", network: "solana") { id }
        }"#,
        json!({ "id": id }),
    )
    .await;

    assert_eq!(data["collection"]["id"], id.as_str());
    assert_eq!(data["collections"], json!([{ "id": id }]));
    assert_eq!(data["getCollectionsOfUser"], json!([{ "id": id }]));
    assert_eq!(data["getCollectionByAddress"]["id"], id.as_str());
    assert!(data["missing"].is_null());

    let delete = r#"mutation Delete($id: UUID!) { deleteCollection(id: $id) { id } }"#;
    execute_ok(&db, delete, json!({ "id": id })).await;

    let response = execute(&db, delete, json!({ "id": id })).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_nft_activity_log() {
    let db = setup_test_db().await.unwrap();
    let nft = seed_nft(&db, NftSeed {
        name: "Rookie Card",
        minutes: 1,
        ..NftSeed::default()
    })
    .await;

    let create = r#"mutation Record($input: CreateNftActivityInput!) {
        createNftActivity(input: $input) { id event fromAddress toAddress }
    }"#;

    let minted = execute_ok(
        &db,
        create,
        json!({ "input": { "nftId": nft.id.to_string(), "event": "MINTED", "toAddress": "0xa11ce" } }),
    )
    .await;

    assert_eq!(minted["createNftActivity"]["event"], "MINTED");

    execute_ok(
        &db,
        create,
        json!({ "input": {
            "nftId": nft.id.to_string(),
            "event": "SALE",
            "fromAddress": "0xa11ce",
            "toAddress": "0xb0b",
            "price": 4.0,
        } }),
    )
    .await;

    execute_ok(
        &db,
        create,
        json!({ "input": { "event": "TRANSFER", "fromAddress": "0xcarol", "toAddress": "0xdave" } }),
    )
    .await;

    let data = execute_ok(
        &db,
        r#"query Log($nftId: UUID!) {
            nftActivities { id }
            nftActivitiesOfNft(nftId: $nftId) { event }
            nftActivitiesOfAddress(address: "0xa11ce") { event }
        }"#,
        json!({ "nftId": nft.id.to_string() }),
    )
    .await;

    assert_eq!(data["nftActivities"].as_array().unwrap().len(), 3);
    assert_eq!(data["nftActivitiesOfNft"].as_array().unwrap().len(), 2);
    assert_eq!(data["nftActivitiesOfAddress"].as_array().unwrap().len(), 2);

    let id = minted["createNftActivity"]["id"].clone();
    let delete = r#"mutation Delete($id: UUID!) { deleteNftActivity(id: $id) { event } }"#;

    let data = execute_ok(&db, delete, json!({ "id": id })).await;
    assert_eq!(data["deleteNftActivity"]["event"], "MINTED");

    let data = execute_ok(&db, "{ nftActivities { id } }", json!({})).await;
    assert_eq!(data["nftActivities"].as_array().unwrap().len(), 2);
}
