use crate::reference::Reference;

pub static HEADERS: &[Reference] = &[
    Reference::new(
        "Accept",
        "Media types the client is able to understand",
        "The Accept request header advertises which content types, expressed \
         as MIME types, the client is able to understand. The server uses \
         content negotiation to select one of the proposals and informs the \
         client of its choice with the Content-Type response header.\n\n\
         Several types can be listed, each optionally weighted with a quality \
         value, for example: Accept: text/html, application/xhtml+xml, \
         application/xml;q=0.9, */*;q=0.8",
    ),
    Reference::new(
        "Accept-CH",
        "Client hints the server wants to receive",
        "The Accept-CH response header may be set by a server to specify \
         which client hint headers should be included by the client in \
         subsequent requests, for example Viewport-Width or Device-Memory.\n\n\
         Client hints are only sent over secure connections and are subject \
         to the browser's privacy settings.",
    ),
    Reference::new(
        "Accept-Encoding",
        "Content encodings the client is able to understand",
        "The Accept-Encoding request header indicates the content encoding, \
         usually a compression algorithm, that the client can understand. The \
         server selects one of the proposals, uses it and informs the client \
         of its choice with the Content-Encoding response header.\n\n\
         Common values are gzip, deflate, br and zstd. The identity value \
         means no encoding, and an asterisk matches any encoding not listed \
         explicitly.",
    ),
    Reference::new(
        "Accept-Language",
        "Natural languages and locales the client prefers",
        "The Accept-Language request header indicates the natural language \
         and locale that the client prefers. The server uses content \
         negotiation to select one of the proposals and informs the client of \
         the choice with the Content-Language response header.\n\n\
         Browsers set the value from the user's language preferences, for \
         example: Accept-Language: fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, \
         *;q=0.5",
    ),
    Reference::new(
        "Accept-Patch",
        "Media types the server accepts in a PATCH request",
        "The Accept-Patch response header advertises which media types the \
         server is able to understand in a PATCH request. A server may \
         include it in a response to any method, and its presence implies \
         that PATCH is allowed on the resource.\n\n\
         A 415 Unsupported Media Type response to a PATCH should carry this \
         header.",
    ),
    Reference::new(
        "Accept-Post",
        "Media types the server accepts in a POST request",
        "The Accept-Post response header advertises which media types are \
         accepted by the server for HTTP POST requests. It is typically sent \
         in response to an OPTIONS request, or with a 415 Unsupported Media \
         Type response to a POST.",
    ),
    Reference::new(
        "Accept-Ranges",
        "Whether the server supports range requests",
        "The Accept-Ranges response header is a marker used by the server to \
         advertise its support for partial requests from the client for file \
         downloads. The value indicates the unit that can be used to define a \
         range, usually bytes.\n\n\
         A value of none means the server does not support range requests, \
         which is the same as omitting the header.",
    ),
    Reference::new(
        "Access-Control-Allow-Credentials",
        "Whether a CORS response may be exposed when credentials are included",
        "The Access-Control-Allow-Credentials response header tells browsers \
         whether to expose the response to the frontend JavaScript code when \
         the request's credentials mode is include.\n\n\
         The only valid value is true. When used in a preflight response it \
         indicates whether the actual request can be made using credentials.",
    ),
    Reference::new(
        "Access-Control-Allow-Headers",
        "Headers allowed in the actual CORS request",
        "The Access-Control-Allow-Headers response header is used in response \
         to a preflight request which includes \
         Access-Control-Request-Headers, to indicate which HTTP headers can \
         be used during the actual request.\n\n\
         CORS-safelisted request headers are always allowed and do not need \
         to be listed.",
    ),
    Reference::new(
        "Access-Control-Allow-Methods",
        "Methods allowed in the actual CORS request",
        "The Access-Control-Allow-Methods response header specifies one or \
         more methods allowed when accessing a resource in response to a \
         preflight request.",
    ),
    Reference::new(
        "Access-Control-Allow-Origin",
        "Whether the response can be shared with the requesting origin",
        "The Access-Control-Allow-Origin response header indicates whether \
         the response can be shared with requesting code from the given \
         origin.\n\n\
         The value is either a single origin, the wildcard * for requests \
         without credentials, or null. Servers that answer different origins \
         differently should also send Vary: Origin.",
    ),
    Reference::new(
        "Access-Control-Expose-Headers",
        "Response headers exposed to scripts in a CORS response",
        "The Access-Control-Expose-Headers response header allows a server to \
         indicate which response headers should be made available to scripts \
         running in the browser, in response to a cross-origin request.\n\n\
         Only the CORS-safelisted response headers are exposed by default.",
    ),
    Reference::new(
        "Access-Control-Max-Age",
        "How long preflight results may be cached",
        "The Access-Control-Max-Age response header indicates how long the \
         results of a preflight request, that is the information contained in \
         the Access-Control-Allow-Methods and Access-Control-Allow-Headers \
         headers, can be cached, in seconds.",
    ),
    Reference::new(
        "Access-Control-Request-Headers",
        "Headers the actual CORS request will use",
        "The Access-Control-Request-Headers request header is used by \
         browsers when issuing a preflight request, to let the server know \
         which HTTP headers the client might send when the actual request is \
         made.",
    ),
    Reference::new(
        "Access-Control-Request-Method",
        "Method the actual CORS request will use",
        "The Access-Control-Request-Method request header is used by browsers \
         when issuing a preflight request, to let the server know which HTTP \
         method will be used when the actual request is made.",
    ),
    Reference::new(
        "Age",
        "Time in seconds the object has been in a proxy cache",
        "The Age header contains the time in seconds the object was in a \
         proxy cache.\n\n\
         The value is usually close to zero. If it is 0, the object was \
         probably fetched from the origin server; otherwise it is usually \
         calculated as a difference between the proxy's current date and the \
         Date header included in the HTTP response.",
    ),
    Reference::new(
        "Allow",
        "Set of methods supported by a resource",
        "The Allow header lists the set of methods supported by a resource.\n\n\
         It must be sent if the server responds with a 405 Method Not Allowed \
         status code to indicate which request methods can be used. An empty \
         Allow header indicates that the resource allows no request methods.",
    ),
    Reference::new(
        "Alt-Svc",
        "Alternative services that can reach the same resource",
        "The Alt-Svc response header lets a server indicate that another \
         network location, the alternative service, can be treated as \
         authoritative for that origin when making future requests.\n\n\
         It is used to advertise HTTP/3 support, for example: Alt-Svc: \
         h3=\":443\"; ma=86400",
    ),
    Reference::new(
        "Authorization",
        "Credentials to authenticate a user agent with a server",
        "The Authorization request header can be used to provide credentials \
         that authenticate a user agent with a server, allowing access to a \
         protected resource.\n\n\
         It is usually, but not always, sent after the user agent first \
         attempts to request a protected resource without credentials and \
         receives a 401 Unauthorized response with a WWW-Authenticate header.\n\n\
         The value starts with the authentication scheme, such as Basic or \
         Bearer, followed by the credentials.",
    ),
    Reference::new(
        "Cache-Control",
        "Directives for caching in both requests and responses",
        "The Cache-Control header holds directives that control caching in \
         browsers and shared caches such as proxies and CDNs.\n\n\
         Common response directives are max-age, no-cache, no-store, private, \
         public, must-revalidate and immutable. Requests can carry directives \
         such as no-cache and max-stale.\n\n\
         no-cache does not mean do not cache: it allows caches to store a \
         response but requires them to revalidate it before reuse. Use \
         no-store to prevent storage altogether.",
    ),
    Reference::new(
        "Clear-Site-Data",
        "Clears browsing data for the requesting site",
        "The Clear-Site-Data response header clears browsing data, such as \
         cookies, storage and cache, associated with the requesting website. \
         It allows developers to have more control over the data stored by a \
         client browser for their origins, for example on logout.",
    ),
    Reference::new(
        "Connection",
        "Whether the network connection stays open after the transaction",
        "The Connection general header controls whether the network \
         connection stays open after the current transaction finishes. If the \
         value sent is keep-alive, the connection is persistent and not \
         closed, allowing subsequent requests to the same server.\n\n\
         Connection-specific headers are prohibited in HTTP/2 and HTTP/3.",
    ),
    Reference::new(
        "Content-Disposition",
        "Whether content is displayed inline or downloaded as an attachment",
        "In a regular HTTP response, the Content-Disposition response header \
         indicates whether the content is expected to be displayed inline in \
         the browser, as a web page or part of one, or as an attachment that \
         is downloaded and saved locally.\n\n\
         The filename parameter suggests a name for the saved file. In a \
         multipart/form-data body, the header gives information for each \
         subpart, such as the form field name.",
    ),
    Reference::new(
        "Content-Encoding",
        "Encodings applied to the representation",
        "The Content-Encoding representation header lists the encodings and \
         the order in which they have been applied to a resource. This lets \
         the recipient know how to decode the data in order to obtain the \
         original content format described in the Content-Type header.\n\n\
         Content encoding is mainly used to compress content without losing \
         information about the original media type.",
    ),
    Reference::new(
        "Content-Language",
        "Language intended for the audience",
        "The Content-Language representation header is used to describe the \
         language intended for the audience, so users can differentiate it \
         according to their own preferred language.\n\n\
         It does not indicate the language of the document itself; the lang \
         attribute is used for that.",
    ),
    Reference::new(
        "Content-Length",
        "Size of the message body in bytes",
        "The Content-Length header indicates the size of the message body, in \
         bytes, sent to the recipient.\n\n\
         It is required by servers that answer 411 Length Required, and must \
         not be sent with Transfer-Encoding. An incorrect value can cause \
         responses to be truncated or requests to be misinterpreted.",
    ),
    Reference::new(
        "Content-Location",
        "Alternate location for the returned data",
        "The Content-Location header indicates an alternate location for the \
         returned data. Its main use is to indicate the URL of a resource \
         transmitted as the result of content negotiation.\n\n\
         Location and Content-Location are different: Location indicates the \
         URL of a redirect, while Content-Location indicates the direct URL \
         to use to access the resource without further negotiation.",
    ),
    Reference::new(
        "Content-Range",
        "Where a partial body belongs in the full resource",
        "The Content-Range response header indicates where in a full body \
         message a partial message belongs, for example: Content-Range: bytes \
         200-1000/67589\n\n\
         It is sent with 206 Partial Content responses, and with 416 Range \
         Not Satisfiable to report the full size of the resource.",
    ),
    Reference::new(
        "Content-Security-Policy",
        "Controls resources the user agent may load for a page",
        "The Content-Security-Policy response header allows website \
         administrators to control resources the user agent is allowed to \
         load for a given page. With a few exceptions, policies mostly \
         involve specifying server origins and script endpoints.\n\n\
         It helps guard against cross-site scripting attacks. Directives \
         include default-src, script-src, style-src, img-src, connect-src and \
         frame-ancestors.",
    ),
    Reference::new(
        "Content-Type",
        "Media type of the resource or body",
        "The Content-Type representation header is used to indicate the \
         original media type of the resource before any content encoding is \
         applied.\n\n\
         In responses, it tells the client what the type of the returned \
         content actually is. In requests such as POST or PUT, the client \
         tells the server what type of data is actually sent.\n\n\
         Browsers may sniff the content type when this header is missing or \
         wrong; X-Content-Type-Options: nosniff prevents that.",
    ),
    Reference::new(
        "Cookie",
        "Stored cookies previously sent by the server",
        "The Cookie request header contains stored HTTP cookies associated \
         with the server, that is cookies previously sent by the server with \
         the Set-Cookie header or set in JavaScript using document.cookie.\n\n\
         It is optional and may be omitted if, for example, the browser's \
         privacy settings block cookies.",
    ),
    Reference::new(
        "Date",
        "Date and time at which the message originated",
        "The Date general header contains the date and time at which the \
         message originated, for example: Date: Wed, 21 Oct 2015 07:28:00 GMT",
    ),
    Reference::new(
        "ETag",
        "Identifier for a specific version of a resource",
        "The ETag response header is an identifier for a specific version of \
         a resource. It lets caches be more efficient and save bandwidth, as \
         a web server does not need to resend a full response if the content \
         was not changed.\n\n\
         When a resource changes, a new ETag must be generated. Comparing \
         ETags with If-Match also prevents simultaneous updates from \
         overwriting each other. A W/ prefix marks a weak validator.",
    ),
    Reference::new(
        "Expect",
        "Expectations the server must meet to handle the request",
        "The Expect request header indicates expectations that need to be met \
         by the server in order to handle the request successfully.\n\n\
         The only defined expectation is 100-continue. The server answers 100 \
         Continue if it will accept the body, or 417 Expectation Failed if \
         the expectation cannot be met.",
    ),
    Reference::new(
        "Expires",
        "Date and time after which the response is considered stale",
        "The Expires header contains the date and time after which the \
         response is considered expired. Invalid values, like 0, represent a \
         date in the past and mean the resource is already expired.\n\n\
         If there is a Cache-Control header with the max-age or s-maxage \
         directive in the response, the Expires header is ignored.",
    ),
    Reference::new(
        "Forwarded",
        "Information from the client-facing side of proxies",
        "The Forwarded request header contains information that may be added \
         by reverse proxy servers that would otherwise be altered or lost \
         when proxy servers are involved in the path of the request, such as \
         the client address and the original protocol.\n\n\
         It is the standardized version of X-Forwarded-For, X-Forwarded-Host \
         and X-Forwarded-Proto.",
    ),
    Reference::new(
        "From",
        "Email address of the human controlling the user agent",
        "The From request header contains an Internet email address for a \
         human user who controls the requesting user agent. Robotic agents \
         such as crawlers may send it so that administrators can contact the \
         operator about problems.",
    ),
    Reference::new(
        "Host",
        "Host and port of the server the request is sent to",
        "The Host request header specifies the host and port number of the \
         server to which the request is being sent.\n\n\
         A Host header must be sent in all HTTP/1.1 request messages. A 400 \
         Bad Request status code may be sent to any HTTP/1.1 request message \
         that lacks a Host header or that contains more than one.",
    ),
    Reference::new(
        "If-Match",
        "Makes the request conditional on matching ETags",
        "The If-Match request header makes a request conditional. A server \
         will only return requested resources for GET and HEAD methods, or \
         upload resource for PUT and other non-safe methods, if the resource \
         matches one of the listed ETag values.\n\n\
         If the conditional does not match, the 412 Precondition Failed \
         response is returned. It is commonly used to avoid the lost update \
         problem.",
    ),
    Reference::new(
        "If-Modified-Since",
        "Makes the request conditional on the modification date",
        "The If-Modified-Since request header makes the request conditional: \
         the server sends back the requested resource, with a 200 status, \
         only if it has been last modified after the given date.\n\n\
         If the resource has not been modified since, the response is a 304 \
         without any body. If-Modified-Since can only be used with GET or \
         HEAD, and is ignored when used with If-None-Match.",
    ),
    Reference::new(
        "If-None-Match",
        "Makes the request conditional on not matching ETags",
        "The If-None-Match request header makes the request conditional. For \
         GET and HEAD methods, the server returns the requested resource, \
         with a 200 status, only if it does not have an ETag matching the \
         given ones. For other methods, the request is processed only if the \
         eventually existing resource's ETag does not match any of the values \
         listed.\n\n\
         When the condition fails for GET and HEAD methods, the server must \
         return 304 Not Modified.",
    ),
    Reference::new(
        "If-Range",
        "Makes a range request conditional",
        "The If-Range request header makes a range request conditional. If \
         the condition is fulfilled, the range request is issued and the \
         server sends back a 206 Partial Content answer with the appropriate \
         body. If the condition is not fulfilled, the full resource is sent \
         back with a 200 OK status.\n\n\
         It is used to resume a download while making sure the stored \
         resource has not been modified since the last fragment was received.",
    ),
    Reference::new(
        "If-Unmodified-Since",
        "Makes the request conditional on the resource being unchanged",
        "The If-Unmodified-Since request header makes the request \
         conditional: the server will send the requested resource or accept \
         it in the case of a POST or another non-safe method only if the \
         resource has not been modified after the specified date.\n\n\
         If the resource has been modified after the specified date, the \
         response will be a 412 Precondition Failed error.",
    ),
    Reference::new(
        "Keep-Alive",
        "Hints about how the persistent connection may be used",
        "The Keep-Alive general header allows the sender to hint about how \
         the connection may be used to set a timeout and a maximum amount of \
         requests, for example: Keep-Alive: timeout=5, max=1000\n\n\
         Connection must be set to keep-alive for this header to have any \
         meaning. It is prohibited in HTTP/2 and HTTP/3.",
    ),
    Reference::new(
        "Last-Modified",
        "Date and time the origin server believes the resource was last modified",
        "The Last-Modified response header contains a date and time when the \
         origin server believes the resource was last modified. It is used as \
         a validator to determine if the resource is the same as the \
         previously stored one.\n\n\
         Less accurate than an ETag header, it is a fallback mechanism. \
         Conditional requests containing If-Modified-Since or \
         If-Unmodified-Since headers make use of this field.",
    ),
    Reference::new(
        "Link",
        "Relationships between the resource and other resources",
        "The Link header provides a means for serializing one or more links \
         in HTTP headers. It is semantically equivalent to the HTML link \
         element.\n\n\
         It is used for preloading, pagination in APIs and with 103 Early \
         Hints, for example: Link: </style.css>; rel=preload; as=style",
    ),
    Reference::new(
        "Location",
        "URL to redirect a page to",
        "The Location response header indicates the URL to redirect a page \
         to. It only provides a meaning when served with a 3xx redirection \
         response or a 201 Created status response.\n\n\
         In the case of 201 Created, it indicates the URL of the newly \
         created resource.",
    ),
    Reference::new(
        "Max-Forwards",
        "Limit on the number of proxies a TRACE or OPTIONS request may pass",
        "The Max-Forwards request header is used with the TRACE method to \
         limit the number of nodes, usually proxies, that the request goes \
         through. Each proxy decrements the value; the first one to receive 0 \
         answers the request itself.",
    ),
    Reference::new(
        "Origin",
        "Origin that caused the request",
        "The Origin request header indicates the origin, that is the scheme, \
         hostname and port, that caused the request. For example, if a user \
         agent needs to request resources included in a page, or fetched by \
         scripts that it executes, then the origin of the page may be \
         included in the request.\n\n\
         It is sent with CORS requests and with POST requests, and is the \
         basis of many cross-site request forgery defenses.",
    ),
    Reference::new(
        "Pragma",
        "Implementation-specific caching directives from HTTP/1.0",
        "The Pragma HTTP/1.0 general header is an implementation-specific \
         header that may have various effects along the request-response \
         chain. It is used for backwards compatibility with HTTP/1.0 caches \
         where the Cache-Control HTTP/1.1 header is not yet present.\n\n\
         It is deprecated; use Cache-Control instead.",
    ),
    Reference::new(
        "Proxy-Authenticate",
        "Authentication method for accessing a resource behind a proxy",
        "The Proxy-Authenticate response header defines the authentication \
         method that should be used to gain access to a resource behind a \
         proxy server. It is sent in a 407 Proxy Authentication Required \
         response so a client can identify itself to a proxy that requires \
         authentication.",
    ),
    Reference::new(
        "Proxy-Authorization",
        "Credentials to authenticate a user agent with a proxy",
        "The Proxy-Authorization request header contains the credentials to \
         authenticate a user agent to a proxy server, usually after the \
         server has responded with a 407 Proxy Authentication Required status \
         and the Proxy-Authenticate header.",
    ),
    Reference::new(
        "Range",
        "Parts of a resource the server should return",
        "The Range request header indicates the part of a document that the \
         server should return. Several parts can be requested with one Range \
         header at once, and the server may send back these ranges in a \
         multipart document, for example: Range: bytes=200-1000, 19000-\n\n\
         If the server sends back ranges, it uses 206 Partial Content. If the \
         ranges are invalid, the server returns 416 Range Not Satisfiable. A \
         server can ignore the Range header and return the whole document \
         with 200.",
    ),
    Reference::new(
        "Referer",
        "Address of the page making the request",
        "The Referer request header contains the absolute or partial address \
         from which a resource has been requested. It allows a server to \
         identify referring pages that people are visiting from, or where \
         requested resources are being used, for analytics, logging and \
         optimized caching.\n\n\
         The name is a misspelling of the word referrer. What is sent is \
         governed by the Referrer-Policy header.",
    ),
    Reference::new(
        "Referrer-Policy",
        "How much referrer information is included with requests",
        "The Referrer-Policy header controls how much referrer information, \
         sent with the Referer header, should be included with requests.\n\n\
         Values include no-referrer, origin, same-origin, strict-origin and \
         strict-origin-when-cross-origin, which is the default in modern \
         browsers.",
    ),
    Reference::new(
        "Retry-After",
        "How long the user agent should wait before a follow-up request",
        "The Retry-After response header indicates how long the user agent \
         should wait before making a follow-up request.\n\n\
         With 503 Service Unavailable it indicates how long the service is \
         expected to be unavailable. With 429 Too Many Requests it indicates \
         how long to wait before making a new request. With a redirect it is \
         the minimum time to wait before issuing the redirected request. The \
         value is either an HTTP date or a number of seconds.",
    ),
    Reference::new(
        "Server",
        "Software used by the origin server",
        "The Server header describes the software used by the origin server \
         that handled the request.\n\n\
         Avoid overly detailed Server values, as they can reveal information \
         that may make it slightly easier for attackers to exploit known \
         security holes.",
    ),
    Reference::new(
        "Set-Cookie",
        "Sends a cookie from the server to the user agent",
        "The Set-Cookie response header is used to send a cookie from the \
         server to the user agent, so that the user agent can send it back to \
         the server later. To send multiple cookies, multiple Set-Cookie \
         headers should be sent in the same response.\n\n\
         Attributes such as Expires, Max-Age, Domain, Path, Secure, HttpOnly \
         and SameSite control the lifetime and scope of the cookie.",
    ),
    Reference::new(
        "Strict-Transport-Security",
        "Tells browsers to only use HTTPS",
        "The Strict-Transport-Security response header, often abbreviated as \
         HSTS, informs browsers that the site should only be accessed using \
         HTTPS, and that any future attempts to access it using HTTP should \
         automatically be converted to HTTPS.\n\n\
         The max-age directive gives the time in seconds the rule is \
         remembered; includeSubDomains extends it to every subdomain, and \
         preload signals consent to browser preload lists.",
    ),
    Reference::new(
        "TE",
        "Transfer encodings the user agent accepts",
        "The TE request header specifies the transfer encodings the user \
         agent is willing to accept. In HTTP/2 and HTTP/3 the only permitted \
         value is trailers, which signals that the client accepts trailer \
         fields in a chunked transfer coding.",
    ),
    Reference::new(
        "Trailer",
        "Headers that will be present in the trailer of a chunked message",
        "The Trailer response header allows the sender to include additional \
         fields at the end of chunked messages in order to supply metadata \
         that might be dynamically generated while the message body is sent, \
         such as a message integrity check, digital signature, or \
         post-processing status.",
    ),
    Reference::new(
        "Transfer-Encoding",
        "Encoding used to transfer the body safely",
        "The Transfer-Encoding header specifies the form of encoding used to \
         safely transfer the payload body to the user.\n\n\
         Transfer-Encoding is a hop-by-hop header, applied to a message \
         between two nodes, not to the resource itself. The chunked value \
         sends the body as a series of chunks and is not allowed in HTTP/2, \
         which has its own streaming mechanism.",
    ),
    Reference::new(
        "Upgrade",
        "Upgrades an established connection to a different protocol",
        "The Upgrade general header can be used to upgrade an already \
         established client/server connection to a different protocol over \
         the same transport protocol, for example from HTTP/1.1 to WebSocket.\n\n\
         The server agrees with a 101 Switching Protocols response, or \
         refuses by ignoring the header. It is prohibited in HTTP/2.",
    ),
    Reference::new(
        "User-Agent",
        "Identifies the application, operating system and vendor of the requester",
        "The User-Agent request header is a characteristic string that lets \
         servers and network peers identify the application, operating \
         system, vendor, and version of the requesting user agent.\n\n\
         User agent sniffing is unreliable and discouraged; feature detection \
         is a better way to adapt content to the client.",
    ),
    Reference::new(
        "Vary",
        "Request headers that influenced the response",
        "The Vary response header describes the parts of the request message \
         aside from the method and URL that influenced the content of the \
         response it occurs in. Most often, this is used to create a cache \
         key when content negotiation is in use.\n\n\
         A value of * means the response varies on factors outside the \
         request headers and cannot be reused from a cache. Vary: \
         Accept-Encoding is commonly sent with compressed content.",
    ),
    Reference::new(
        "Via",
        "Proxies the request or response passed through",
        "The Via general header is added by proxies, both forward and \
         reverse, and can appear in the request or response headers. It is \
         used for tracking message forwards, avoiding request loops, and \
         identifying the protocol capabilities of senders along the \
         request-response chain.",
    ),
    Reference::new(
        "WWW-Authenticate",
        "Authentication method for accessing a resource",
        "The WWW-Authenticate response header advertises the HTTP \
         authentication methods, or challenges, that might be used to gain \
         access to a specific resource.\n\n\
         A server using HTTP authentication responds with 401 Unauthorized \
         and one or more WWW-Authenticate headers naming the schemes it \
         accepts, such as Basic with a realm parameter.",
    ),
    Reference::new(
        "X-Content-Type-Options",
        "Disables MIME type sniffing",
        "The X-Content-Type-Options response header is a marker used by the \
         server to indicate that the MIME types advertised in the \
         Content-Type headers should be respected and not changed.\n\n\
         The only value is nosniff. It blocks style and script requests whose \
         type does not match, which avoids MIME type confusion attacks.",
    ),
    Reference::new(
        "X-Forwarded-For",
        "Originating IP address of a client connecting through a proxy",
        "The X-Forwarded-For request header is a de-facto standard header for \
         identifying the originating IP address of a client connecting to a \
         web server through a proxy server. Each proxy appends the address it \
         received the request from.\n\n\
         The value can be set by the client and should not be trusted for \
         security decisions. Forwarded is the standardized alternative.",
    ),
    Reference::new(
        "X-Frame-Options",
        "Whether a page may be rendered in a frame",
        "The X-Frame-Options response header can be used to indicate whether \
         a browser should be allowed to render a page in a frame, iframe, \
         embed or object element. Sites can use this to avoid clickjacking \
         attacks, by ensuring that their content is not embedded into other \
         sites.\n\n\
         Values are DENY and SAMEORIGIN. The frame-ancestors directive of \
         Content-Security-Policy supersedes it.",
    ),
];
